//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 list and search endpoints
//! and normalizes their items into feed records.

mod api;
mod client;
mod normalize;
mod rate_limiter;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
pub use normalize::{IMAGE_BASE_URL, normalize_item, normalize_page};
#[allow(clippy::module_name_repetitions)]
pub use types::{TmdbMediaItem, TmdbPage};
