//! Request and response contracts for the song resource
//!
//! Constraint violations are collected per field by `validator`, so a bad
//! request reports every failing field at once rather than the first one.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::song;

/// Payload for creating a song
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSongRequest {
    #[validate(length(min = 1, max = 30, message = "name must be between 1 and 30 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "url must be between 1 and 200 characters"))]
    pub url: String,
    /// Defaults to 0 when omitted
    #[validate(range(min = 0, message = "plays must not be negative"))]
    pub plays: Option<i32>,
}

/// Payload for updating a song
///
/// Every field is optional; an absent field leaves the stored value
/// unchanged. An empty body is a valid no-op update. The play count and
/// creation timestamp are not updatable through this contract.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSongRequest {
    #[validate(length(min = 1, max = 30, message = "name must be between 1 and 30 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200, message = "url must be between 1 and 200 characters"))]
    pub url: Option<String>,
}

/// Song as returned by the API (`created_at` stays internal)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongResponse {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub plays: i32,
}

impl From<song::Model> for SongResponse {
    fn from(model: song::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            plays: model.plays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(name: &str, url: &str, plays: Option<i32>) -> CreateSongRequest {
        CreateSongRequest {
            name: name.to_string(),
            url: url.to_string(),
            plays,
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        let request = create_request("My Song", "https://example.com/song", Some(3));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_without_plays_passes() {
        let request = create_request("My Song", "https://example.com/song", None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = create_request("", "https://example.com/song", None);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_name_length_bounds() {
        let at_limit = create_request(&"x".repeat(30), "https://example.com", None);
        assert!(at_limit.validate().is_ok());

        let over_limit = create_request(&"x".repeat(31), "https://example.com", None);
        let errors = over_limit.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_url_length_bounds() {
        let at_limit = create_request("Song", &"u".repeat(200), None);
        assert!(at_limit.validate().is_ok());

        let over_limit = create_request("Song", &"u".repeat(201), None);
        let errors = over_limit.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_negative_plays_is_rejected() {
        let request = create_request("Song", "https://example.com", Some(-1));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("plays"));

        let zero = create_request("Song", "https://example.com", Some(0));
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_all_violations_are_reported_together() {
        let request = create_request("", "", Some(-5));
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("url"));
        assert!(fields.contains_key("plays"));
    }

    #[test]
    fn test_empty_update_request_is_valid() {
        let request = UpdateSongRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_checks_present_fields() {
        let request = UpdateSongRequest {
            name: Some("".to_string()),
            url: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_response_excludes_created_at() {
        let model = song::Model {
            id: 1,
            name: "Song".to_string(),
            url: "https://example.com".to_string(),
            plays: 2,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let response = SongResponse::from(model);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("created_at").is_none());
        assert_eq!(value["plays"], 2);
    }
}
