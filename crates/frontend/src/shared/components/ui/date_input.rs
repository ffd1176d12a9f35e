use leptos::prelude::*;

/// DateInput component with native date picker
///
/// Values cross the boundary as raw `yyyy-mm-dd` strings; the page parses
/// and validates them before they touch the filter state.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// Marks the input invalid for styling and assistive tech
    #[prop(optional, into)]
    invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class=move || {
                if invalid.get() {
                    "form__date-input form__date-input--invalid"
                } else {
                    "form__date-input"
                }
            }
            aria-invalid=move || if invalid.get() { "true" } else { "false" }
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
