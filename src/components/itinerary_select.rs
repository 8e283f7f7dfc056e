//! Itinerary Selector

use leptos::prelude::*;

use super::SelectField;
use crate::models::{to_options, Itinerary};

#[component]
pub fn ItinerarySelect(
    #[prop(into)] itineraries: Signal<Vec<Itinerary>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || itineraries.with(|i| to_options(i)));

    view! {
        <SelectField
            label="Itinerary"
            placeholder="Select an itinerary"
            options=options
            value=value
            disabled=is_loading
            on_change=on_change
        />
    }
}
