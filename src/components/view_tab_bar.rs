//! View Tab Bar Component
//!
//! Switches between the cascading dashboard and the itinerary list.

use leptos::prelude::*;

use crate::context::{use_app_context, View};

const TABS: &[(View, &str)] = &[
    (View::Dashboard, "Dashboard"),
    (View::Itineraries, "Itineraries"),
];

#[component]
pub fn ViewTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="view-tab-bar">
            {TABS.iter().map(|(tab, label)| {
                let tab = *tab;
                let is_active = move || ctx.current_view.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "view-tab active" } else { "view-tab" }
                        on:click=move |_| ctx.show(tab)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
