//! Frontend Models
//!
//! Data structures matching backend entities, plus the JSON envelopes the
//! endpoints wrap them in.

use serde::{Deserialize, Serialize};

/// Anything the backend identifies with a numeric primary key
pub trait Entity {
    fn id(&self) -> u32;
}

/// Entities that can appear as an `<option>` in a selector
pub trait SelectOption: Entity {
    fn label(&self) -> String;

    fn value(&self) -> String {
        self.id().to_string()
    }
}

/// Map records to `(value, label)` pairs in backend order
pub fn to_options<T: SelectOption>(records: &[T]) -> Vec<(String, String)> {
    records.iter().map(|r| (r.value(), r.label())).collect()
}

/// Travel agency (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Agency user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub travel_agency_id: u32,
}

/// Itinerary data structure (matches backend)
///
/// `user_id` is absent on itineraries created from the flat CRUD form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: u32,
    pub tour_name: String,
    pub date_start: String,
    pub date_end: String,
    #[serde(default)]
    pub user_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub date_start: String,
    pub date_end: String,
    pub location_start: String,
    pub location_end: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub transporter: Option<String>,
    pub itinerary_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lodging {
    pub id: u32,
    pub date_start: String,
    pub date_end: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub room_count: Option<u32>,
    pub itinerary_id: u32,
}

/// `GET /agencies/itineraries/:id/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDetails {
    pub itinerary: Itinerary,
    pub trips: Vec<Trip>,
    pub lodgings: Vec<Lodging>,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct ItinerariesResponse {
    pub itineraries: Vec<Itinerary>,
}

/// `GET /itineraries`; paging metadata and links are ignored
#[derive(Debug, Deserialize)]
pub struct ItineraryList {
    pub data: Vec<Itinerary>,
}

/// `POST /itineraries` (201)
#[derive(Debug, Deserialize)]
pub struct CreatedItinerary {
    pub data: Itinerary,
}

/// Unsaved itinerary from the CRUD form, sent as-is as the POST body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDraft {
    pub tour_name: String,
    pub date_start: String,
    pub date_end: String,
}

impl ItineraryDraft {
    pub fn is_blank(&self) -> bool {
        self.tour_name.is_empty() && self.date_start.is_empty() && self.date_end.is_empty()
    }
}

impl Entity for Agency {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Entity for User {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Entity for Itinerary {
    fn id(&self) -> u32 {
        self.id
    }
}

impl SelectOption for Agency {
    fn label(&self) -> String {
        self.name.clone()
    }
}

impl SelectOption for User {
    fn label(&self) -> String {
        self.name.clone()
    }
}

impl SelectOption for Itinerary {
    fn label(&self) -> String {
        self.tour_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_nullable_columns_decode_to_none() {
        let agency: Agency = serde_json::from_str(
            r#"{"id":1,"name":"Acme","phone":null,"address":null,"logo":null}"#,
        )
        .unwrap();
        assert_eq!(agency.name, "Acme");
        assert!(agency.phone.is_none());

        // Minimal payloads are accepted too
        let sparse: Agency = serde_json::from_str(r#"{"id":1,"name":"Acme"}"#).unwrap();
        assert!(sparse.logo.is_none());
    }

    #[test]
    fn test_details_decode_with_nested_relations() {
        let json = r#"{
            "itinerary": {"id":9,"tour_name":"Peru","date_start":"2024-01-01","date_end":"2024-01-05","user_id":5},
            "trips": [{"id":1,"date_start":"2024-01-01","date_end":"2024-01-02","location_start":"Lima",
                       "location_end":"Cusco","mode":"Flight","transporter":null,"itinerary_id":9}],
            "lodgings": [{"id":2,"date_start":"2024-01-02","date_end":"2024-01-05","name":"Casa",
                          "address":"Plaza 1","phone":null,"room_count":2,"itinerary_id":9}]
        }"#;
        let details: ItineraryDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.itinerary.tour_name, "Peru");
        assert_eq!(details.itinerary.user_id, Some(5));
        assert_eq!(details.trips[0].mode.as_deref(), Some("Flight"));
        assert!(details.trips[0].transporter.is_none());
        assert_eq!(details.lodgings[0].room_count, Some(2));
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        // id must be numeric
        assert!(serde_json::from_str::<User>(r#"{"id":"x","name":"Bob","email":"b@x","travel_agency_id":1}"#).is_err());
        // envelope key is required
        assert!(serde_json::from_str::<UsersResponse>(r#"[]"#).is_err());
    }

    #[test]
    fn test_itinerary_list_ignores_paging_metadata() {
        let json = r#"{"data":[{"id":1,"tour_name":"X","date_start":"2024-01-01","date_end":"2024-01-05","user_id":null}],
                       "_meta":{"page":1,"per_page":10,"total":1},"_links":{"self":"/api/itineraries"}}"#;
        let list: ItineraryList = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert!(list.data[0].user_id.is_none());
    }

    #[test]
    fn test_to_options_preserves_order() {
        let users = vec![
            User { id: 5, name: "Bob".into(), email: "bob@acme.test".into(), travel_agency_id: 1 },
            User { id: 2, name: "Ann".into(), email: "ann@acme.test".into(), travel_agency_id: 1 },
        ];
        assert_eq!(
            to_options(&users),
            vec![("5".to_string(), "Bob".to_string()), ("2".to_string(), "Ann".to_string())]
        );
    }

    #[test]
    fn test_draft_serializes_as_post_body() {
        let draft = ItineraryDraft {
            tour_name: "X".into(),
            date_start: "2024-01-01".into(),
            date_end: "2024-01-05".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["tour_name"], "X");
        assert_eq!(value["date_end"], "2024-01-05");
        assert!(!draft.is_blank());
        assert!(ItineraryDraft::default().is_blank());
    }
}
