//! `podsite-http` is an async HTTP content client for the podsite backend
//! API.
//!
//! The crate wraps the site's content endpoints with a retrying fetch,
//! page-embedded fallback substitution, and a consistent
//! loading/error/retry contract:
//! - [`PodsiteClient`] — typed endpoint methods with timeout and
//!   exponential-backoff retry
//! - [`ContentController`] — per-area load/fallback/error state machine
//! - [`FallbackStore`] — build-time embedded fallback documents

mod client;
mod config;
mod controller;
mod error;
mod fallback;
mod model;
pub mod playback;
mod presenter;
mod retry;
mod transport;

pub use client::PodsiteClient;
pub use config::{endpoints, ApiConfig, FeatureFlags, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use controller::{ContentArea, ContentController, ContentView, LoadOutcome, LoadState};
pub use error::{ErrorBody, PodsiteError};
pub use fallback::FallbackStore;
pub use model::{newest_first, AboutContent, Episode, FaqContent, FaqItem};
pub use playback::{PlaybackEffect, PlaybackSession, PlayerCommand};
pub use presenter::{ErrorPresenter, LoadingHandle, Notice, Severity};
pub use retry::{RetryDecision, RetryPolicy};
pub use transport::{RequestSpec, Transport};

pub type Result<T> = std::result::Result<T, PodsiteError>;
