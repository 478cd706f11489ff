use std::env;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Environment variable that overrides the API base URL at runtime.
pub const BASE_URL_ENV: &str = "PODSITE_API_BASE_URL";

/// Paths of the content endpoints, relative to the API base URL.
pub mod endpoints {
    pub const FEATURED_EPISODE: &str = "/episodes/featured";
    pub const EPISODES: &str = "/episodes";
    pub const ABOUT: &str = "/about";
    pub const FAQ: &str = "/faq";
    pub const HEALTH: &str = "/health";

    /// Path of a single episode looked up by id.
    pub fn episode_by_id(id: &str) -> String {
        format!("/episodes/{id}")
    }
}

/// Configures where requests go and how they behave.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout for content requests.
    pub timeout: Duration,
    /// Backoff schedule and attempt budget for transient failures.
    pub retry: RetryPolicy,
    /// Runtime toggles for the loading/fallback/error UI behavior.
    pub features: FeatureFlags,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_millis(10_000),
            retry: RetryPolicy::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl ApiConfig {
    /// Builds the default configuration, honoring the `PODSITE_API_BASE_URL`
    /// override when it is set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var(BASE_URL_ENV) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                config.base_url = trimmed.trim_end_matches('/').to_owned();
            }
        }
        config
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Feature toggles carried over from the page configuration. All default to
/// enabled; pages can switch individual behaviors off without touching the
/// pipeline itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeatureFlags {
    /// Substitute page-embedded fallback content when the API fails.
    pub use_fallback_content: bool,
    /// Show loading indicators while a request is in flight.
    pub enable_loading_states: bool,
    /// Surface error and warning banners to the user.
    pub enable_error_ui: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            use_fallback_content: true,
            enable_loading_states: true,
            enable_error_ui: true,
        }
    }
}
