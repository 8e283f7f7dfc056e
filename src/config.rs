//! API Configuration
//!
//! Base URL and request timeout, baked in at build time.

use std::time::Duration;

/// Relative default so the dev proxy (Trunk.toml) forwards `/api/*` to the backend;
/// resolved against the page origin before use
pub const DEFAULT_BASE_URL: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    /// Read `API_BASE_URL` / `API_TIMEOUT_MS` from the build environment.
    /// A relative base is anchored to the page origin when one is available.
    pub fn from_build_env() -> Self {
        let config = Self::from_values(option_env!("API_BASE_URL"), option_env!("API_TIMEOUT_MS"));
        match page_origin() {
            Some(origin) => config.resolved_against(&origin),
            None => config,
        }
    }

    pub fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let timeout = timeout_ms
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);
        Self { base_url, timeout }
    }

    /// Whether the base carries a scheme and host
    pub fn is_absolute(&self) -> bool {
        self.base_url.contains("://")
    }

    /// Prefix a relative base with `origin` (`scheme://host[:port]`).
    /// The HTTP client rejects URLs without a host.
    pub fn resolved_against(mut self, origin: &str) -> Self {
        if !self.is_absolute() {
            let origin = origin.trim_end_matches('/');
            let path = self.base_url.trim_matches('/');
            self.base_url = if path.is_empty() {
                origin.to_string()
            } else {
                format!("{}/{}", origin, path)
            };
        }
        self
    }

    /// Join an endpoint path (leading `/`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.endpoint("/agencies"), "/api/agencies");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::from_values(Some("http://localhost:8000/api/"), Some("2500"));
        assert_eq!(config.endpoint("/itineraries/3"), "http://localhost:8000/api/itineraries/3");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        assert_eq!(ApiConfig::from_values(None, Some("soon")).timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(ApiConfig::from_values(None, Some("0")).timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(ApiConfig::from_values(Some("  "), None).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_relative_base_resolves_against_page_origin() {
        let config = ApiConfig::default().resolved_against("http://localhost:3000");
        assert!(config.is_absolute());
        assert_eq!(config.endpoint("/agencies"), "http://localhost:3000/api/agencies");

        let bare = ApiConfig::from_values(Some("api"), None).resolved_against("https://trips.example/");
        assert_eq!(bare.endpoint("/itineraries"), "https://trips.example/api/itineraries");
    }

    #[test]
    fn test_absolute_base_ignores_origin() {
        let config = ApiConfig::from_values(Some("http://localhost:8000/api"), None)
            .resolved_against("http://localhost:3000");
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_resolved_default_builds_a_request() {
        let config = ApiConfig::default();
        let relative = reqwest::Client::new().get(config.endpoint("/agencies")).build();
        assert!(relative.is_err());

        let resolved = config.resolved_against("http://127.0.0.1:3000");
        let request = reqwest::Client::new().get(resolved.endpoint("/agencies")).build().unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:3000/api/agencies");
    }
}
