//! Agency Selector

use leptos::prelude::*;

use super::SelectField;
use crate::models::{to_options, Agency};

#[component]
pub fn AgencySelect(
    #[prop(into)] agencies: Signal<Vec<Agency>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || agencies.with(|a| to_options(a)));

    view! {
        <SelectField
            label="Travel Agency"
            placeholder="Select an agency"
            options=options
            value=value
            disabled=is_loading
            on_change=on_change
        />
    }
}
