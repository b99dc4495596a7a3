//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::TmdbPage;
use crate::movie::Category;

/// TMDB API trait.
///
/// Abstracts the upstream calls behind the feed endpoint for mock
/// substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches one page of a category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn list(&self, category: Category, language: &str, page: u32) -> Result<TmdbPage>;

    /// Searches movies, series and people (`search/multi`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_multi(&self, query: &str, language: &str, page: u32) -> Result<TmdbPage>;
}
