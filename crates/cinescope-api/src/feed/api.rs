//! `FeedApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::movie::{Category, Movie};

/// Feed operations used by the landing page.
///
/// Failures never surface: every operation degrades to an empty or
/// negative answer and logs the cause. Uses `trait_variant::make` to
/// generate a `Send`-bound async trait for spawned tasks.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(FeedApi: Send)]
pub trait LocalFeedApi {
    /// Fetches one category, or an empty list on failure.
    async fn fetch_category(&self, category: Category) -> Vec<Movie>;

    /// Searches movies and series, or returns an empty list on failure.
    async fn search_movies(&self, query: &str) -> Vec<Movie>;

    /// Checks whether an artwork URL can be loaded.
    async fn probe_artwork(&self, url: &str) -> bool;
}
