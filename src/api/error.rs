//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("request to {url} timed out after {millis} ms")]
    Timeout { url: String, millis: u64 },

    /// Selection value that is not a numeric id
    #[error("invalid id: {0:?}")]
    InvalidId(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Network { url: url.to_string(), message: err.to_string() }
    }

    pub fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Decode { url: url.to_string(), message: err.to_string() }
    }
}

/// Parse a `<select>` value into an id
pub fn parse_id(value: &str) -> ApiResult<u32> {
    value.trim().parse::<u32>().map_err(|_| ApiError::InvalidId(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7"), Ok(7));
        assert_eq!(parse_id(" 12 "), Ok(12));
        assert_eq!(parse_id(""), Err(ApiError::InvalidId(String::new())));
        assert!(parse_id("-1").is_err());
        assert!(parse_id("abc").is_err());
    }

    #[test]
    fn test_messages_name_the_url() {
        let err = ApiError::Status { url: "/api/itineraries/4".into(), status: 404 };
        assert_eq!(err.to_string(), "/api/itineraries/4 returned HTTP 404");
        let timeout = ApiError::Timeout { url: "/api/agencies".into(), millis: 10 };
        assert_eq!(timeout.to_string(), "request to /api/agencies timed out after 10 ms");
    }
}
