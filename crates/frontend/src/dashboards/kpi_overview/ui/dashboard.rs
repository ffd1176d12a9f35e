use crate::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Checkbox, DateInput};
use crate::shared::format::{format_number, format_percent, format_units};
use contracts::dashboards::kpi_daily::summarize;
use contracts::shared::filters::{parse_date_input, FilterField};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use super::super::state::KpiOverviewState;

/// Landing page: overall KPI cards plus the per-warehouse breakdown, with
/// the date-range / warehouse filter panel above them.
#[component]
pub fn KpiOverviewDashboard() -> impl IntoView {
    let state = KpiOverviewState::new();
    let panel_expanded = RwSignal::new(false);
    // The navigate handle is not Send; park it thread-locally so reactive
    // closures can hold a Copy of it.
    let navigate = StoredValue::new_local(use_navigate());

    let load_kpi = move || {
        state.loading.set(true);
        state.load_failed.set(false);

        let query = state.filters.get_untracked().to_query();
        spawn_local(async move {
            match api::fetch_kpi_daily(&query).await {
                Ok(response) => {
                    state.summary.set(summarize(&response.data));
                    state.loading.set(false);
                }
                Err(err) => {
                    log::error!("Failed to load KPI data: {}", err);
                    state.load_failed.set(true);
                    state.loading.set(false);
                }
            }
        });
    };

    // Warehouse directory first (it feeds the checkbox panel), then the KPI
    // rows; the requests go out sequentially.
    spawn_local(async move {
        match api::fetch_warehouses().await {
            Ok(response) => {
                state
                    .checked
                    .set(response.data.iter().map(|w| w.warehouse_id.clone()).collect());
                state.warehouses.set(response.data);
            }
            Err(err) => log::error!("Failed to load warehouses: {}", err),
        }
        load_kpi();
    });

    let apply_filters = move |_| {
        let start = match parse_date_input(
            FilterField::StartDate,
            &state.start_input.get_untracked(),
        ) {
            Ok(d) => d,
            Err(err) => {
                state.date_error.set(Some(err));
                return;
            }
        };
        let end = match parse_date_input(
            FilterField::EndDate,
            &state.end_input.get_untracked(),
        ) {
            Ok(d) => d,
            Err(err) => {
                state.date_error.set(Some(err));
                return;
            }
        };

        let mut filters = state.filters.get_untracked();
        if let Err(err) = filters.set_date_range(start, end) {
            state.date_error.set(Some(err));
            return;
        }

        // A fully ticked panel travels as "no filter" so new warehouses are
        // picked up without re-applying.
        let known = state.known_ids();
        let checked = state.checked.get_untracked();
        let selection = if !known.is_empty() && checked.len() == known.len() {
            Vec::new()
        } else {
            known.into_iter().filter(|id| checked.contains(id)).collect()
        };
        filters.set_warehouse_selection(selection);

        state.date_error.set(None);
        state.filters.set(filters);
        panel_expanded.set(false);
        load_kpi();
    };

    let reset_filters = move |_| {
        let mut filters = state.filters.get_untracked();
        filters.reset();

        let defaults = filters.to_query();
        state.start_input.set(defaults.start.to_string());
        state.end_input.set(defaults.end.to_string());
        state.checked.set(state.known_ids().into_iter().collect());
        state.date_error.set(None);
        state.filters.set(filters);
        panel_expanded.set(false);
        load_kpi();
    };

    let avg_hours = Signal::derive(move || state.summary.get().overall.avg_fulfillment_hours);
    let on_time_rate = Signal::derive(move || state.summary.get().overall.on_time_rate);
    let total_units =
        Signal::derive(move || state.summary.get().overall.total_units.map(|u| u as f64));

    let start_invalid = Signal::derive(move || {
        state
            .date_error
            .get()
            .is_some_and(|e| e.field() == FilterField::StartDate)
    });
    let end_invalid = Signal::derive(move || {
        state
            .date_error
            .get()
            .is_some_and(|e| e.field() == FilterField::EndDate)
    });

    let all_checked = Signal::derive(move || {
        let warehouses = state.warehouses.get();
        !warehouses.is_empty()
            && warehouses
                .iter()
                .all(|w| state.checked.with(|c| c.contains(&w.warehouse_id)))
    });
    let toggle_all = Callback::new(move |checked: bool| {
        if checked {
            state
                .checked
                .set(state.known_ids().into_iter().collect());
        } else {
            state.checked.update(|c| c.clear());
        }
    });

    view! {
        <div class="page">
            <PageHeader
                title="Supply Chain KPIs"
                subtitle="Fulfillment performance across warehouses".to_string()
            >
                <></>
            </PageHeader>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || state.filters.get().active_filter_count())
            >
                <Flex vertical=true gap=FlexGap::Medium>
                    <div class="filter-form__section">
                        <Label>"Date range"</Label>
                        <Flex align=FlexAlign::Center gap=FlexGap::Small>
                            <DateInput
                                value=state.start_input
                                on_change=move |v| state.start_input.set(v)
                                invalid=start_invalid
                            />
                            <div>"—"</div>
                            <DateInput
                                value=state.end_input
                                on_change=move |v| state.end_input.set(v)
                                invalid=end_invalid
                            />
                        </Flex>
                        {move || state.date_error.get().map(|err| view! {
                            <div class="field-error" role="alert">{err.to_string()}</div>
                        })}
                    </div>

                    <div class="filter-form__section">
                        <Label>"Warehouses"</Label>
                        <div class="filter-form__checkboxes">
                            <Checkbox
                                id="warehouse-all".to_string()
                                label="All".to_string()
                                checked=all_checked
                                on_change=toggle_all
                            />
                            {move || state.warehouses.get().into_iter().map(|warehouse| {
                                let id = warehouse.warehouse_id.clone();
                                let toggle_id = warehouse.warehouse_id.clone();
                                let checked = Signal::derive({
                                    let id = id.clone();
                                    move || state.checked.with(|c| c.contains(&id))
                                });
                                let on_change = Callback::new(move |is_checked: bool| {
                                    let id = toggle_id.clone();
                                    state.checked.update(|c| {
                                        if is_checked {
                                            c.insert(id);
                                        } else {
                                            c.remove(&id);
                                        }
                                    });
                                });
                                view! {
                                    <Checkbox
                                        label=format!("{} - {}", warehouse.warehouse_id, warehouse.city)
                                        checked=checked
                                        on_change=on_change
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=apply_filters
                        >
                            "Apply"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=reset_filters
                        >
                            "Reset"
                        </Button>
                    </Flex>
                </Flex>
            </FilterPanel>

            <div class="stat-grid">
                <StatCard
                    label="Avg Fulfillment Hours"
                    value=avg_hours
                    format=ValueFormat::Number
                    loading=state.loading
                    error=state.load_failed
                />
                <StatCard
                    label="On-Time Rate"
                    value=on_time_rate
                    format=ValueFormat::Percent
                    loading=state.loading
                    error=state.load_failed
                />
                <StatCard
                    label="Total Units"
                    value=total_units
                    format=ValueFormat::Integer
                    loading=state.loading
                    error=state.load_failed
                />
            </div>

            <div class="table-section">
                <h2 class="table-section__title">"By Warehouse"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Warehouse"</th>
                            <th>"Avg Fulfillment (hrs)"</th>
                            <th>"On-Time Rate"</th>
                            <th>"Units"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if state.load_failed.get() {
                                view! {
                                    <tr><td colspan="4" class="empty-state">"Failed to load data."</td></tr>
                                }.into_any()
                            } else if state.loading.get() {
                                view! {
                                    <tr><td colspan="4" class="empty-state">"Loading..."</td></tr>
                                }.into_any()
                            } else {
                                let rows = state.summary.get().by_warehouse;
                                if rows.is_empty() {
                                    view! {
                                        <tr><td colspan="4" class="empty-state">
                                            "No warehouse data available for selected filters."
                                        </td></tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(|warehouse| {
                                        let detail_url =
                                            format!("/warehouse?id={}", warehouse.warehouse_id);
                                        view! {
                                            <tr
                                                role="row"
                                                tabindex="0"
                                                class="data-table__row data-table__row--link"
                                                on:click=move |_| {
                                                    navigate.with_value(|nav| {
                                                        nav(&detail_url, NavigateOptions::default())
                                                    })
                                                }
                                            >
                                                <td>{warehouse.warehouse_id.clone()}</td>
                                                <td>{format_number(warehouse.avg_fulfillment_hours)}</td>
                                                <td>{format_percent(warehouse.on_time_rate)}</td>
                                                <td>{format_units(warehouse.units)}</td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
