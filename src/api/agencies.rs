//! Agency Endpoints
//!
//! Bindings for `/agencies` and `/agencies/:id/users`.

use super::{ApiClient, ApiResult};
use crate::models::{Agency, User, UsersResponse};

// ========================
// Paths
// ========================

pub fn agencies_path() -> String {
    "/agencies".to_string()
}

pub fn agency_users_path(agency_id: u32) -> String {
    format!("/agencies/{}/users", agency_id)
}

// ========================
// Requests
// ========================

pub async fn list_agencies(client: &ApiClient) -> ApiResult<Vec<Agency>> {
    client.get_json::<Vec<Agency>>(&agencies_path()).await
}

pub async fn list_agency_users(client: &ApiClient, agency_id: u32) -> ApiResult<Vec<User>> {
    let body: UsersResponse = client.get_json(&agency_users_path(agency_id)).await?;
    Ok(body.users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(agencies_path(), "/agencies");
        assert_eq!(agency_users_path(1), "/agencies/1/users");
    }
}
