use crate::app_shell::AppShell;
use crate::dashboards::data_quality::ui::DataQualityDashboard;
use crate::dashboards::kpi_overview::ui::KpiOverviewDashboard;
use crate::domain::warehouse::ui::details::WarehouseDetails;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppShell>
                <Routes fallback=|| view! { <div class="empty-state">"Page not found."</div> }>
                    <Route path=path!("/") view=KpiOverviewDashboard />
                    <Route path=path!("/data-quality") view=DataQualityDashboard />
                    <Route path=path!("/warehouse") view=WarehouseDetails />
                </Routes>
            </AppShell>
        </Router>
    }
}
