//! CRUD View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::crud::CrudOutcome;
use crate::models::{Itinerary, ItineraryDraft};

/// State of the itinerary CRUD view with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CrudState {
    /// Flat itinerary list as last fetched
    pub itineraries: Vec<Itinerary>,
    /// Form fields not yet submitted
    pub draft: ItineraryDraft,
    /// Inline error message, if the last operation failed
    pub error: Option<String>,
}

impl CrudState {
    pub fn apply(&mut self, outcome: CrudOutcome) {
        if let Some(itineraries) = outcome.itineraries {
            self.itineraries = itineraries;
        }
        if outcome.clear_draft {
            self.draft = ItineraryDraft::default();
        }
        self.error = outcome.error.map(str::to_string);
    }
}

/// Type alias for the store
pub type CrudStore = Store<CrudState>;

/// Get the CRUD store from context
pub fn use_crud_store() -> CrudStore {
    expect_context::<CrudStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a finished create/delete/list flow
pub fn store_apply_outcome(store: &CrudStore, outcome: CrudOutcome) {
    store.update(|state| state.apply(outcome));
}

/// Snapshot of the draft for submission
pub fn store_draft(store: &CrudStore) -> ItineraryDraft {
    store.draft().get_untracked()
}
