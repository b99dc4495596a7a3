//! Movie feed client module.
//!
//! Talks to the single feed endpoint (`?type=trending|top_rated|search`)
//! and resolves every failure to an empty result list.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{FeedApi, LocalFeedApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_ENDPOINT, FeedClient, FeedClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{ErrorFlag, FeedResponse};
