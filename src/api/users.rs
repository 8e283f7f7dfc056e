//! User Endpoints

use super::{ApiClient, ApiResult};
use crate::models::{ItinerariesResponse, Itinerary};

pub fn user_itineraries_path(user_id: u32) -> String {
    format!("/agencies/users/{}/itineraries", user_id)
}

pub async fn list_user_itineraries(client: &ApiClient, user_id: u32) -> ApiResult<Vec<Itinerary>> {
    let body: ItinerariesResponse = client.get_json(&user_itineraries_path(user_id)).await?;
    Ok(body.itineraries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        assert_eq!(user_itineraries_path(5), "/agencies/users/5/itineraries");
    }
}
