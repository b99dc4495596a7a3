//! TMDB API response types.

use serde::Deserialize;

/// One page of a list or search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbPage {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Page items.
    #[serde(default)]
    pub results: Vec<TmdbMediaItem>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u64,
}

/// A movie, series or person entry.
///
/// Movies carry `title`/`release_date`, series carry `name`/`first_air_date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMediaItem {
    /// TMDB ID.
    pub id: u64,
    /// Movie title.
    pub title: Option<String>,
    /// Series (or person) name.
    pub name: Option<String>,
    /// Original movie title.
    pub original_title: Option<String>,
    /// Original series name.
    pub original_name: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Vote average.
    pub vote_average: Option<f64>,
    /// Vote count.
    pub vote_count: Option<u64>,
    /// Movie release date (YYYY-MM-DD, may be empty).
    pub release_date: Option<String>,
    /// Series first air date (YYYY-MM-DD, may be empty).
    pub first_air_date: Option<String>,
    /// `movie`, `tv` or `person` (only on trending and multi search).
    pub media_type: Option<String>,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Popularity score.
    pub popularity: Option<f64>,
}

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[allow(dead_code)]
    pub success: bool,
}
