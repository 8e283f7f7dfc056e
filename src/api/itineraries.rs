//! Itinerary Endpoints
//!
//! The detail view lives under `/agencies/itineraries`; the flat CRUD
//! collection under `/itineraries`.

use super::{ApiClient, ApiResult};
use crate::models::{CreatedItinerary, Itinerary, ItineraryDetails, ItineraryDraft, ItineraryList};

// ========================
// Paths
// ========================

pub fn itinerary_details_path(itinerary_id: u32) -> String {
    format!("/agencies/itineraries/{}/details", itinerary_id)
}

pub fn itineraries_path() -> String {
    "/itineraries".to_string()
}

pub fn itinerary_path(itinerary_id: u32) -> String {
    format!("/itineraries/{}", itinerary_id)
}

// ========================
// Requests
// ========================

pub async fn get_itinerary_details(client: &ApiClient, itinerary_id: u32) -> ApiResult<ItineraryDetails> {
    client.get_json(&itinerary_details_path(itinerary_id)).await
}

pub async fn list_itineraries(client: &ApiClient) -> ApiResult<Vec<Itinerary>> {
    let body: ItineraryList = client.get_json(&itineraries_path()).await?;
    Ok(body.data)
}

/// POST the draft untouched; the backend owns validation
pub async fn create_itinerary(client: &ApiClient, draft: &ItineraryDraft) -> ApiResult<Itinerary> {
    let body: CreatedItinerary = client.post_json(&itineraries_path(), draft).await?;
    Ok(body.data)
}

pub async fn delete_itinerary(client: &ApiClient, itinerary_id: u32) -> ApiResult<()> {
    client.delete(&itinerary_path(itinerary_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(itinerary_details_path(9), "/agencies/itineraries/9/details");
        assert_eq!(itineraries_path(), "/itineraries");
        assert_eq!(itinerary_path(3), "/itineraries/3");
    }
}
