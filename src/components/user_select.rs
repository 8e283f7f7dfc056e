//! User Selector

use leptos::prelude::*;

use super::SelectField;
use crate::models::{to_options, User};

#[component]
pub fn UserSelect(
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || users.with(|u| to_options(u)));

    view! {
        <SelectField
            label="User"
            placeholder="Select a user"
            options=options
            value=value
            disabled=is_loading
            on_change=on_change
        />
    }
}
