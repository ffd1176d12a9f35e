use leptos::prelude::*;
use leptos_router::components::A;

/// Page chrome shared by every route: brand header with top navigation,
/// routed content below.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header data-zone="header" class="header">
                <div class="header__content">
                    <span class="header__title">"Supply Chain KPIs"</span>
                    <nav class="header__nav">
                        <A href="/">"Dashboard"</A>
                        <A href="/data-quality">"Data Quality"</A>
                    </nav>
                </div>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
