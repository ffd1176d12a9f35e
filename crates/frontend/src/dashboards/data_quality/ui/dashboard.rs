use crate::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{FreshnessBadge, TestStatusBadge};
use crate::shared::format::{format_age_hours, format_datetime};
use contracts::dashboards::data_quality::{FreshnessResponse, ModelTestsResponse, TestStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Data-quality monitor: upstream source freshness plus the latest model
/// test run.
#[component]
pub fn DataQualityDashboard() -> impl IntoView {
    let freshness = RwSignal::new(None::<FreshnessResponse>);
    let tests = RwSignal::new(None::<ModelTestsResponse>);
    let loading = RwSignal::new(true);
    let load_failed = RwSignal::new(false);

    // Freshness first, then the test results. Either failure is terminal
    // for the load cycle; only a page refresh retries.
    spawn_local(async move {
        match api::fetch_freshness().await {
            Ok(response) => freshness.set(Some(response)),
            Err(err) => {
                log::error!("Failed to load freshness data: {}", err);
                load_failed.set(true);
                loading.set(false);
                return;
            }
        }

        match api::fetch_model_tests().await {
            Ok(response) => tests.set(Some(response)),
            Err(err) => {
                log::error!("Failed to load test results: {}", err);
                load_failed.set(true);
            }
        }
        loading.set(false);
    });

    let tests_meta_line = move || {
        tests.get().map(|response| {
            format!(
                "Last run: {} ({} of {} passed)",
                format_datetime(response.meta.last_run),
                response.meta.passed_tests,
                response.meta.total_tests,
            )
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title="Data Quality"
                subtitle="Source freshness and model test results".to_string()
            >
                <></>
            </PageHeader>

            {move || load_failed.get().then(|| view! {
                <div class="alert alert--error">"Failed to load data"</div>
            })}

            <div class="table-section">
                <h2 class="table-section__title">"Source Freshness"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Source"</th>
                            <th>"Last Updated"</th>
                            <th>"Status"</th>
                            <th>"Age"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td colspan="4" class="empty-state">"Loading..."</td></tr>
                                }.into_any();
                            }
                            match freshness.get() {
                                Some(response) if !response.data.is_empty() => response
                                    .data
                                    .into_iter()
                                    .map(|row| view! {
                                        <tr role="row" class="data-table__row">
                                            <td>{row.source_name.clone()}</td>
                                            <td>{format_datetime(row.last_updated)}</td>
                                            <td><FreshnessBadge status=row.status /></td>
                                            <td>{format_age_hours(row.age_hours)}</td>
                                        </tr>
                                    })
                                    .collect_view()
                                    .into_any(),
                                _ => view! {
                                    <tr><td colspan="4" class="empty-state">
                                        "No freshness data available."
                                    </td></tr>
                                }.into_any(),
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="table-section">
                <h2 class="table-section__title">"Model Tests"</h2>
                <div class="table-section__meta">{tests_meta_line}</div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Model"</th>
                            <th>"Test"</th>
                            <th>"Status"</th>
                            <th>"Last Run"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td colspan="4" class="empty-state">"Loading..."</td></tr>
                                }.into_any();
                            }
                            match tests.get() {
                                Some(response) if !response.data.is_empty() => response
                                    .data
                                    .into_iter()
                                    .map(|row| {
                                        let row_class = if row.status == TestStatus::Fail {
                                            "data-table__row data-table__row--failed"
                                        } else {
                                            "data-table__row"
                                        };
                                        view! {
                                            <tr role="row" class=row_class>
                                                <td>{row.model_name.clone()}</td>
                                                <td>{row.test_name.clone()}</td>
                                                <td><TestStatusBadge status=row.status /></td>
                                                <td>{format_datetime(row.last_run)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                                _ => view! {
                                    <tr><td colspan="4" class="empty-state">
                                        "No test results available."
                                    </td></tr>
                                }.into_any(),
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
