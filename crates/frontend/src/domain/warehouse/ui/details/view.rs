use crate::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::OnTimeBadge;
use crate::shared::format::{format_datetime, format_number, format_units};
use contracts::dashboards::kpi_daily::summarize;
use contracts::domain::order::{OrderRow, OrdersQuery};
use contracts::domain::warehouse::Warehouse;
use contracts::shared::filters::FilterState;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

/// Drill-down page for a single warehouse: reference header, KPI cards
/// over the default window, recent orders.
///
/// The warehouse id comes from the `id` query parameter; without one there
/// is nothing to show and the page bounces back to the overview.
#[component]
pub fn WarehouseDetails() -> impl IntoView {
    let warehouse_id = use_query_map().get_untracked().get("id");

    let warehouse = RwSignal::new(None::<Warehouse>);
    let summary = RwSignal::new(summarize(&[]));
    let orders = RwSignal::new(Vec::<OrderRow>::new());
    let loading = RwSignal::new(true);
    let load_failed = RwSignal::new(false);
    let not_found = RwSignal::new(false);

    let navigate = StoredValue::new_local(use_navigate());

    match warehouse_id {
        None => {
            // Deferred so the router is fully set up before we leave.
            Effect::new(move |_| {
                navigate.with_value(|nav| nav("/", NavigateOptions::default()));
            });
        }
        Some(id) => {
            // Warehouse info, then KPI rows, then orders. An unknown id or
            // any failure stops the chain there.
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_warehouse(&id).await {
                    Ok(response) => match response.data {
                        Some(found) => warehouse.set(Some(found)),
                        None => {
                            not_found.set(true);
                            loading.set(false);
                            return;
                        }
                    },
                    Err(err) => {
                        log::error!("Failed to load warehouse {}: {}", id, err);
                        load_failed.set(true);
                        loading.set(false);
                        return;
                    }
                }

                let mut filters = FilterState::new();
                filters.set_warehouse_selection(vec![id.clone()]);
                match api::fetch_kpi_daily(&filters.to_query()).await {
                    Ok(response) => summary.set(summarize(&response.data)),
                    Err(err) => {
                        log::error!("Failed to load KPI data for {}: {}", id, err);
                        load_failed.set(true);
                        loading.set(false);
                        return;
                    }
                }

                let orders_query = OrdersQuery {
                    warehouse_id: id.clone(),
                    start: None,
                    end: None,
                };
                match api::fetch_orders(&orders_query).await {
                    Ok(response) => orders.set(response.data),
                    Err(err) => {
                        log::error!("Failed to load orders for {}: {}", id, err);
                        load_failed.set(true);
                    }
                }
                loading.set(false);
            });
        }
    }

    let avg_hours = Signal::derive(move || summary.get().overall.avg_fulfillment_hours);
    let on_time_rate = Signal::derive(move || summary.get().overall.on_time_rate);
    let total_units = Signal::derive(move || summary.get().overall.total_units.map(|u| u as f64));

    view! {
        <div class="page">
            <div class="breadcrumbs">
                <A href="/">"Dashboard"</A>
                <span class="breadcrumbs__separator">"/"</span>
                <span>"Warehouse"</span>
            </div>

            {move || {
                if not_found.get() {
                    return view! {
                        <div class="error-message">"Warehouse not found."</div>
                    }.into_any();
                }
                match warehouse.get() {
                    Some(w) => view! {
                        <div class="detail-header">
                            <h1 class="detail-header__title">{w.warehouse_id.clone()}</h1>
                            <div class="detail-header__meta">
                                <span>{w.city.clone()}</span>
                                <span>
                                    {format!("Capacity: {} units", format_units(w.capacity_units))}
                                </span>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="detail-header">
                            <h1 class="detail-header__title">"--"</h1>
                        </div>
                    }.into_any(),
                }
            }}

            {move || (!not_found.get()).then(|| view! {
                <div class="stat-grid">
                    <StatCard
                        label="Avg Fulfillment Hours"
                        value=avg_hours
                        format=ValueFormat::Number
                        loading=loading
                        error=load_failed
                    />
                    <StatCard
                        label="On-Time Rate"
                        value=on_time_rate
                        format=ValueFormat::Percent
                        loading=loading
                        error=load_failed
                    />
                    <StatCard
                        label="Units"
                        value=total_units
                        format=ValueFormat::Integer
                        loading=loading
                        error=load_failed
                    />
                </div>

                <div class="table-section">
                    <h2 class="table-section__title">"Recent Orders"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Fulfillment"</th>
                                <th>"On Time"</th>
                                <th>"Qty"</th>
                                <th>"Placed"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if load_failed.get() {
                                    return view! {
                                        <tr><td colspan="5" class="empty-state">
                                            "Failed to load data."
                                        </td></tr>
                                    }.into_any();
                                }
                                if loading.get() {
                                    return view! {
                                        <tr><td colspan="5" class="empty-state">"Loading..."</td></tr>
                                    }.into_any();
                                }
                                let rows = orders.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr><td colspan="5" class="empty-state">
                                            "No orders found for this warehouse."
                                        </td></tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(|order| view! {
                                        <tr role="row" class="data-table__row">
                                            <td>{order.order_id.clone()}</td>
                                            <td>{format!("{}h", format_number(order.fulfillment_hours))}</td>
                                            <td><OnTimeBadge on_time=order.on_time_flag /></td>
                                            <td>{format_units(order.qty)}</td>
                                            <td>{format_datetime(order.order_ts)}</td>
                                        </tr>
                                    }).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            })}
        </div>
    }
}
