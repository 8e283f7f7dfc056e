//! REST API Wrappers
//!
//! Typed bindings to the backend endpoints, organized by resource.
//! `DashboardApi` is the seam the views' flows are written against.

mod error;
mod agencies;
mod users;
mod itineraries;

use std::future::Future;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::models::{Agency, Itinerary, ItineraryDetails, ItineraryDraft, User};

pub use error::{parse_id, ApiError, ApiResult};

/// Every backend call the dashboard makes
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn list_agencies(&self) -> ApiResult<Vec<Agency>>;
    async fn list_agency_users(&self, agency_id: u32) -> ApiResult<Vec<User>>;
    async fn list_user_itineraries(&self, user_id: u32) -> ApiResult<Vec<Itinerary>>;
    async fn get_itinerary_details(&self, itinerary_id: u32) -> ApiResult<ItineraryDetails>;
    async fn list_itineraries(&self) -> ApiResult<Vec<Itinerary>>;
    async fn create_itinerary(&self, draft: &ItineraryDraft) -> ApiResult<Itinerary>;
    async fn delete_itinerary(&self, itinerary_id: u32) -> ApiResult<()>;
}

/// HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        if !config.is_absolute() {
            log::warn!("[API] Base URL {:?} has no host; requests will fail", config.base_url);
        }
        Self { http: build_http_client(&config), config }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        log::debug!("[API] GET {}", url);
        let request = self.http.get(&url);
        self.bounded(&url, async {
            let response = request.send().await.map_err(|e| map_send_error(&self.config, &url, e))?;
            let response = check_status(&url, response)?;
            response.json::<T>().await.map_err(|e| ApiError::decode(&url, e))
        })
        .await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        log::debug!("[API] POST {}", url);
        let request = self.http.post(&url).json(body);
        self.bounded(&url, async {
            let response = request.send().await.map_err(|e| map_send_error(&self.config, &url, e))?;
            let response = check_status(&url, response)?;
            response.json::<T>().await.map_err(|e| ApiError::decode(&url, e))
        })
        .await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.config.endpoint(path);
        log::debug!("[API] DELETE {}", url);
        let request = self.http.delete(&url);
        self.bounded(&url, async {
            let response = request.send().await.map_err(|e| map_send_error(&self.config, &url, e))?;
            check_status(&url, response)?;
            Ok(())
        })
        .await
    }

    #[cfg(target_arch = "wasm32")]
    async fn bounded<T>(&self, url: &str, request: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        use futures::future::{select, Either};

        let millis = self.config.timeout.as_millis() as u64;
        let timer = gloo_timers::future::TimeoutFuture::new(millis.min(u32::MAX as u64) as u32);
        futures::pin_mut!(request, timer);
        match select(request, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout { url: url.to_string(), millis }),
        }
    }

    // Native builds rely on the reqwest client timeout
    #[cfg(not(target_arch = "wasm32"))]
    async fn bounded<T>(&self, _url: &str, request: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        request.await
    }
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(target_arch = "wasm32")]
fn map_send_error(_config: &ApiConfig, url: &str, err: reqwest::Error) -> ApiError {
    ApiError::network(url, err)
}

#[cfg(not(target_arch = "wasm32"))]
fn map_send_error(config: &ApiConfig, url: &str, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout { url: url.to_string(), millis: config.timeout.as_millis() as u64 }
    } else {
        ApiError::network(url, err)
    }
}

fn check_status(url: &str, response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { url: url.to_string(), status: status.as_u16() })
    }
}

#[async_trait(?Send)]
impl DashboardApi for ApiClient {
    async fn list_agencies(&self) -> ApiResult<Vec<Agency>> {
        agencies::list_agencies(self).await
    }

    async fn list_agency_users(&self, agency_id: u32) -> ApiResult<Vec<User>> {
        agencies::list_agency_users(self, agency_id).await
    }

    async fn list_user_itineraries(&self, user_id: u32) -> ApiResult<Vec<Itinerary>> {
        users::list_user_itineraries(self, user_id).await
    }

    async fn get_itinerary_details(&self, itinerary_id: u32) -> ApiResult<ItineraryDetails> {
        itineraries::get_itinerary_details(self, itinerary_id).await
    }

    async fn list_itineraries(&self) -> ApiResult<Vec<Itinerary>> {
        itineraries::list_itineraries(self).await
    }

    async fn create_itinerary(&self, draft: &ItineraryDraft) -> ApiResult<Itinerary> {
        itineraries::create_itinerary(self, draft).await
    }

    async fn delete_itinerary(&self, itinerary_id: u32) -> ApiResult<()> {
        itineraries::delete_itinerary(self, itinerary_id).await
    }
}
