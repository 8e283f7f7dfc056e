//! Itinerary CRUD Component
//!
//! Flat list of all itineraries with an add form and per-row delete.
//! Independent of the cascading dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::crud;
use crate::store::{store_apply_outcome, store_draft, use_crud_store, CrudStateStoreFields};

#[component]
pub fn CreateItinerary() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_crud_store();

    // Load itineraries on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let outcome = crud::refresh(&client).await;
            store_apply_outcome(&store, outcome);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store_draft(&store);
        let client = ctx.client();
        spawn_local(async move {
            let outcome = crud::submit_draft(&client, &draft).await;
            store_apply_outcome(&store, outcome);
        });
    };

    let on_delete = move |itinerary_id: u32| {
        let client = ctx.client();
        spawn_local(async move {
            let outcome = crud::delete(&client, itinerary_id).await;
            store_apply_outcome(&store, outcome);
        });
    };

    view! {
        <div class="create-itinerary card">
            <h2 class="card-title">"Itineraries"</h2>

            <form class="itinerary-form" on:submit=on_submit>
                <div class="itinerary-form-row">
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || store.draft().read().tour_name.clone()
                        on:input=move |ev| store.draft().write().tour_name = event_target_value(&ev)
                    />
                    <input
                        type="date"
                        prop:value=move || store.draft().read().date_start.clone()
                        on:input=move |ev| store.draft().write().date_start = event_target_value(&ev)
                    />
                    <input
                        type="date"
                        prop:value=move || store.draft().read().date_end.clone()
                        on:input=move |ev| store.draft().write().date_end = event_target_value(&ev)
                    />
                    <button type="submit">"Add Itinerary"</button>
                </div>
                {move || store.error().get().map(|message| view! {
                    <p class="error-message">{message}</p>
                })}
            </form>

            <div class="itinerary-list">
                <For
                    each=move || store.itineraries().get()
                    key=|itinerary| itinerary.id
                    children=move |itinerary| {
                        let id = itinerary.id;
                        let item_label = itinerary.tour_name.clone();
                        view! {
                            <div class="itinerary-row">
                                <p class="itinerary-name">{itinerary.tour_name}</p>
                                <DeleteConfirmButton
                                    item_label=item_label
                                    on_confirm=Callback::new(move |_: ()| on_delete(id))
                                />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
