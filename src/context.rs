//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// Which top-level view the tab bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Itineraries,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location and timeout
    config: StoredValue<ApiConfig>,
    /// Currently shown view - read
    pub current_view: ReadSignal<View>,
    /// Currently shown view - write
    set_current_view: WriteSignal<View>,
}

impl AppContext {
    pub fn new(config: ApiConfig, current_view: (ReadSignal<View>, WriteSignal<View>)) -> Self {
        Self {
            config: StoredValue::new(config),
            current_view: current_view.0,
            set_current_view: current_view.1,
        }
    }

    /// Fresh client for one request; cheap on wasm since it wraps `fetch`
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }

    pub fn show(&self, view: View) {
        self.set_current_view.set(view);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
