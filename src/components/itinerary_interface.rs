//! Itinerary Dashboard Component
//!
//! Cascading agency -> user -> itinerary selectors with trip and lodging
//! tables for the chosen itinerary. All selection and data state lives here;
//! the selectors and tables only render what they are given.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cascade::{run_fetch, CascadeState, FetchRequest, Level};
use crate::components::{AgencySelect, ItinerarySelect, LodgingsTable, TripsTable, UserSelect};
use crate::context::use_app_context;

#[component]
pub fn ItineraryInterface() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(CascadeState::new());

    // Run a request issued by a transition and feed the response back
    let dispatch = move |request: Option<FetchRequest>| {
        let Some(request) = request else { return };
        let client = ctx.client();
        log::debug!("[ItineraryInterface] Fetching {:?}", request.target);
        spawn_local(async move {
            let outcome = run_fetch(&client, request).await;
            // The view may have been unmounted meanwhile
            state.try_update(|s| s.resolve(outcome));
        });
    };

    // Load agencies on mount
    Effect::new(move |_| {
        dispatch(state.try_update(|s| s.mount()));
    });

    on_cleanup(move || {
        state.try_update(|s| s.invalidate_all());
    });

    let on_agency_change = move |value: String| {
        dispatch(state.try_update(|s| s.select_agency(value)).flatten());
    };
    let on_user_change = move |value: String| {
        dispatch(state.try_update(|s| s.select_user(value)).flatten());
    };
    let on_itinerary_change = move |value: String| {
        dispatch(state.try_update(|s| s.select_itinerary(value)).flatten());
    };

    let agencies = Memo::new(move |_| state.with(|s| s.agencies.clone()));
    let users = Memo::new(move |_| state.with(|s| s.users.clone()));
    let itineraries = Memo::new(move |_| state.with(|s| s.itineraries.clone()));
    let selected_agency = Memo::new(move |_| state.with(|s| s.selected_agency.clone()));
    let selected_user = Memo::new(move |_| state.with(|s| s.selected_user.clone()));
    let selected_itinerary = Memo::new(move |_| state.with(|s| s.selected_itinerary.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let details = Memo::new(move |_| state.with(|s| s.visible_details().cloned()));

    view! {
        <div class="itinerary-interface">
            <h1>"Itinerary Dashboard"</h1>

            <div class="selectors">
                <AgencySelect
                    agencies=agencies
                    value=selected_agency
                    on_change=Callback::new(on_agency_change)
                    is_loading=Signal::derive(move || loading.get().get(Level::Agencies))
                />

                <Show when=move || state.with(|s| s.show_user_select())>
                    <UserSelect
                        users=users
                        value=selected_user
                        on_change=Callback::new(on_user_change)
                        is_loading=Signal::derive(move || loading.get().get(Level::Users))
                    />
                </Show>

                <Show when=move || state.with(|s| s.show_itinerary_select())>
                    <ItinerarySelect
                        itineraries=itineraries
                        value=selected_itinerary
                        on_change=Callback::new(on_itinerary_change)
                        is_loading=Signal::derive(move || loading.get().get(Level::Itineraries))
                    />
                </Show>
            </div>

            {move || details.get().map(|details| view! {
                <div class="itinerary-details">
                    <h2>{details.itinerary.tour_name}</h2>
                    <TripsTable trips=details.trips />
                    <LodgingsTable lodgings=details.lodgings />
                </div>
            })}

            <Show when=move || loading.get().any()>
                <div class="loading-indicator">"Loading..."</div>
            </Show>
        </div>
    }
}
