//! Itinerary CRUD Flows
//!
//! Create/delete/list against the flat `/itineraries` collection. Every
//! successful mutation is followed by exactly one full re-fetch.

use crate::api::DashboardApi;
use crate::models::{Itinerary, ItineraryDraft};

pub const FETCH_FAILED: &str = "Failed to fetch itineraries";
pub const CREATE_FAILED: &str = "Failed to create itinerary";
pub const DELETE_FAILED: &str = "Failed to delete itinerary";

/// What the CRUD view should change after a flow finishes
#[derive(Debug, Clone, PartialEq)]
pub struct CrudOutcome {
    /// Fresh list, when a (re-)fetch succeeded
    pub itineraries: Option<Vec<Itinerary>>,
    pub clear_draft: bool,
    /// `None` clears any previous message
    pub error: Option<&'static str>,
}

impl CrudOutcome {
    fn failed(message: &'static str) -> Self {
        Self { itineraries: None, clear_draft: false, error: Some(message) }
    }
}

pub async fn refresh<A: DashboardApi + ?Sized>(api: &A) -> CrudOutcome {
    match api.list_itineraries().await {
        Ok(itineraries) => {
            log::debug!("[CreateItinerary] Loaded {} itineraries", itineraries.len());
            CrudOutcome { itineraries: Some(itineraries), clear_draft: false, error: None }
        }
        Err(e) => {
            log::error!("[CreateItinerary] Error fetching itineraries: {}", e);
            CrudOutcome::failed(FETCH_FAILED)
        }
    }
}

/// POST the draft as-is. On failure the draft is kept for another attempt.
pub async fn submit_draft<A: DashboardApi + ?Sized>(api: &A, draft: &ItineraryDraft) -> CrudOutcome {
    if draft.is_blank() {
        log::warn!("[CreateItinerary] Submitting an empty itinerary");
    }
    match api.create_itinerary(draft).await {
        Ok(created) => {
            log::info!("[CreateItinerary] Created itinerary #{} {:?}", created.id, created.tour_name);
            CrudOutcome { clear_draft: true, ..refresh(api).await }
        }
        Err(e) => {
            log::error!("[CreateItinerary] Error creating itinerary: {}", e);
            CrudOutcome::failed(CREATE_FAILED)
        }
    }
}

pub async fn delete<A: DashboardApi + ?Sized>(api: &A, itinerary_id: u32) -> CrudOutcome {
    match api.delete_itinerary(itinerary_id).await {
        Ok(()) => {
            log::info!("[CreateItinerary] Deleted itinerary #{}", itinerary_id);
            refresh(api).await
        }
        Err(e) => {
            log::error!("[CreateItinerary] Error deleting itinerary #{}: {}", itinerary_id, e);
            CrudOutcome::failed(DELETE_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;

    fn draft() -> ItineraryDraft {
        ItineraryDraft {
            tour_name: "X".into(),
            date_start: "2024-01-01".into(),
            date_end: "2024-01-05".into(),
        }
    }

    fn existing(id: u32, tour_name: &str) -> Itinerary {
        Itinerary {
            id,
            tour_name: tour_name.into(),
            date_start: "2023-06-01".into(),
            date_end: "2023-06-03".into(),
            user_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_create_clears_draft_and_refetches_once() {
        let api = FakeApi::default();

        let outcome = submit_draft(&api, &draft()).await;

        assert!(outcome.clear_draft);
        assert_eq!(outcome.error, None);
        let list = outcome.itineraries.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].tour_name, "X");
        assert_eq!(api.count("POST /itineraries"), 1);
        assert_eq!(api.count("GET /itineraries"), 1);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_draft_and_skips_refetch() {
        let api = FakeApi { fail_mutations_with: Some(400), ..Default::default() };

        let outcome = submit_draft(&api, &draft()).await;

        assert_eq!(outcome, CrudOutcome { itineraries: None, clear_draft: false, error: Some(CREATE_FAILED) });
        assert_eq!(api.count("GET /itineraries"), 0);
    }

    #[tokio::test]
    async fn test_blank_draft_is_submitted_unvalidated() {
        let api = FakeApi::default();
        let outcome = submit_draft(&api, &ItineraryDraft::default()).await;
        assert_eq!(api.count("POST /itineraries"), 1);
        assert_eq!(outcome.itineraries.unwrap()[0].tour_name, "");
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_untouched() {
        let api = FakeApi { fail_mutations_with: Some(500), ..Default::default() };
        api.flat.borrow_mut().push(existing(4, "Peru"));

        let outcome = delete(&api, 4).await;

        assert_eq!(outcome.error, Some(DELETE_FAILED));
        assert!(outcome.itineraries.is_none());
        assert_eq!(api.flat.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_refetches_list() {
        let api = FakeApi::default();
        api.flat.borrow_mut().extend([existing(4, "Peru"), existing(5, "Oslo")]);

        let outcome = delete(&api, 4).await;

        assert_eq!(outcome.itineraries, Some(vec![existing(5, "Oslo")]));
        assert_eq!(api.count("DELETE /itineraries/4"), 1);
        assert_eq!(api.count("GET /itineraries"), 1);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let api = FakeApi::default();
        api.flat.borrow_mut().extend([existing(1, "Peru"), existing(2, "Oslo")]);

        let first = refresh(&api).await;
        let second = refresh(&api).await;

        assert_eq!(first, second);
        assert_eq!(first.itineraries.map(|l| l.len()), Some(2));
    }

    #[tokio::test]
    async fn test_refresh_failure_reports_fetch_error() {
        let api = FakeApi { fail_list: true, ..Default::default() };
        assert_eq!(refresh(&api).await, CrudOutcome::failed(FETCH_FAILED));
    }

    #[tokio::test]
    async fn test_create_then_failed_refetch_still_clears_draft() {
        let api = FakeApi { fail_list: true, ..Default::default() };
        let outcome = submit_draft(&api, &draft()).await;
        assert!(outcome.clear_draft);
        assert_eq!(outcome.error, Some(FETCH_FAILED));
        assert!(outcome.itineraries.is_none());
    }
}
