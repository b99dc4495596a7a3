//! API client library for cinescope.
//!
//! Provides the movie feed client used by the landing page and the
//! upstream TMDB client used by the feed endpoint.

/// Movie feed endpoint client.
pub mod feed;

/// TMDB genre names.
pub mod genres;

/// Shared movie record and feed categories.
pub mod movie;

/// TMDB API client.
pub mod tmdb;

pub use movie::{Category, FALLBACK_ARTWORK_URL, MediaType, Movie};
