//! Select Field Component
//!
//! Labelled `<select>` with a leading empty option. Shared by the agency,
//! user and itinerary selectors.

use leptos::prelude::*;

/// Stateless select: renders options, reports the chosen value, nothing else
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    /// `(value, label)` pairs
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="select-field">
            <label class="select-label">{label}</label>
            <select
                class="select-input"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, option_label)| {
                        let current = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == current
                            >
                                {option_label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
