//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::route::{self, Route};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        let api = ApiClient::from_config(&config);
        Self {
            route: route.0,
            set_route: route.1,
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Push a history entry and switch views
    pub fn navigate(&self, to: Route) {
        tracing::debug!(path = %to.path(), "navigate");
        route::push_history(&to);
        self.set_route.set(to);
    }

    /// Back/forward: the browser has already moved, just follow it
    pub fn sync_with_location(&self) {
        self.set_route.set(route::current_route());
    }
}

/// Fetch the context provided by [`crate::app::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
