//! Delete Confirm Button Component
//!
//! Row-level delete for the itinerary list. The first click arms the button
//! and names the record; only the explicit "Yes" fires `on_confirm`.

use leptos::prelude::*;

/// Question shown while armed, e.g. `Delete "Peru"?`
pub fn confirm_prompt(item_label: &str) -> String {
    if item_label.trim().is_empty() {
        "Delete this itinerary?".to_string()
    } else {
        format!("Delete \"{}\"?", item_label)
    }
}

#[component]
pub fn DeleteConfirmButton(
    /// Record name used in the tooltip and the prompt
    #[prop(into)]
    item_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, default = "Delete".to_string())] label: String,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let title = format!("Delete {}", item_label);
    let prompt = confirm_prompt(&item_label);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                view! {
                    <button
                        type="button"
                        class="delete-btn"
                        title=title.clone()
                        on:click=move |_| armed.set(true)
                    >
                        {label.clone()}
                    </button>
                }
            }
        >
            <span class="delete-confirm" role="alert">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| armed.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
