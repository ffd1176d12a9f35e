use crate::shared::format::{format_number, format_percent, format_units};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

/// Summary card for one KPI value.
///
/// `None` renders the `--` placeholder (loading or no data for the
/// selected filters); `error` switches the card into its error look with a
/// generic message, replacing the value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Primary numeric value (None = loading or no data)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Whether a load is currently in flight
    #[prop(optional, into)]
    loading: Signal<bool>,
    /// Whether the last load failed
    #[prop(optional, into)]
    error: Signal<bool>,
) -> impl IntoView {
    let card_class = move || {
        if error.get() {
            "stat-card stat-card--error"
        } else if loading.get() {
            "stat-card stat-card--loading"
        } else {
            "stat-card"
        }
    };

    let formatted = move || {
        if error.get() {
            return "Error".to_string();
        }
        if loading.get() {
            return "--".to_string();
        }
        match value.get() {
            Some(v) => match format {
                ValueFormat::Number => format_number(v),
                ValueFormat::Percent => format_percent(v),
                ValueFormat::Integer => format_units(v.round() as u64),
            },
            None => "--".to_string(),
        }
    };

    view! {
        <div class=card_class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}
