//! Itinerary Dashboard App
//!
//! Root component: tab bar plus whichever view is selected.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CreateItinerary, ItineraryInterface, RecentLogPanel, ViewTabBar};
use crate::config::ApiConfig;
use crate::context::{AppContext, View};
use crate::store::CrudState;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let (current_view, set_current_view) = signal(View::Dashboard);

    // Provide context to all children
    provide_context(AppContext::new(config, (current_view, set_current_view)));
    provide_context(Store::new(CrudState::default()));

    view! {
        <div class="app-layout">
            <ViewTabBar />
            <main class="main-content">
                {move || match current_view.get() {
                    View::Dashboard => view! { <ItineraryInterface /> }.into_any(),
                    View::Itineraries => view! { <CreateItinerary /> }.into_any(),
                }}
            </main>
            <RecentLogPanel />
        </div>
    }
}
