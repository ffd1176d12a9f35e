use contracts::dashboards::data_quality::{FreshnessStatus, TestStatus};
use leptos::prelude::*;

/// Colour-coded badge for a source freshness status.
#[component]
pub fn FreshnessBadge(status: FreshnessStatus) -> impl IntoView {
    let badge_class = match status {
        FreshnessStatus::Ok => "badge badge--success",
        FreshnessStatus::Warn => "badge badge--warning",
        FreshnessStatus::Error => "badge badge--error",
    };

    view! {
        <span class=badge_class>{status.label()}</span>
    }
}

/// PASS/FAIL badge for a model test outcome.
#[component]
pub fn TestStatusBadge(status: TestStatus) -> impl IntoView {
    let badge_class = match status {
        TestStatus::Pass => "badge badge--success",
        TestStatus::Fail => "badge badge--error",
    };

    view! {
        <span class=badge_class>{status.label()}</span>
    }
}

/// Yes/No badge for an order's on-time flag.
#[component]
pub fn OnTimeBadge(on_time: bool) -> impl IntoView {
    let (badge_class, text) = if on_time {
        ("badge badge--success", "Yes")
    } else {
        ("badge badge--error", "No")
    };

    view! {
        <span class=badge_class>{text}</span>
    }
}
