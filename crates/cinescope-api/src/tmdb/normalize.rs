//! TMDB item to `Movie` normalization.

use super::types::{TmdbMediaItem, TmdbPage};
use crate::feed::FeedResponse;
use crate::movie::{MediaType, Movie};

/// TMDB image CDN base URL.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Normalizes one TMDB item.
///
/// `fallback_media` is used when the item has no `media_type` (every list
/// endpoint except trending and multi search).
#[must_use]
pub fn normalize_item(item: TmdbMediaItem, fallback_media: MediaType) -> Movie {
    let release_date = non_empty(item.release_date).or_else(|| non_empty(item.first_air_date));
    let year = release_date
        .as_deref()
        .and_then(|date| date.split('-').next())
        .map(String::from)
        .unwrap_or_default();

    Movie {
        id: item.id,
        title: non_empty(item.title)
            .or_else(|| non_empty(item.name))
            .unwrap_or_default(),
        original_title: non_empty(item.original_title).or_else(|| non_empty(item.original_name)),
        overview: item.overview,
        poster_path: non_empty(item.poster_path).map(|p| format!("{IMAGE_BASE_URL}/w500{p}")),
        backdrop_path: non_empty(item.backdrop_path)
            .map(|p| format!("{IMAGE_BASE_URL}/original{p}")),
        rating: round_rating(item.vote_average.unwrap_or(0.0)),
        vote_count: item.vote_count,
        release_date,
        year,
        media_type: Some(
            item.media_type
                .as_deref()
                .map_or(fallback_media, parse_media_type),
        ),
        genre_ids: item.genre_ids,
        adult: item.adult,
        popularity: item.popularity,
    }
}

/// Normalizes a whole page into a feed response body.
#[must_use]
pub fn normalize_page(page: TmdbPage, fallback_media: MediaType) -> FeedResponse {
    FeedResponse {
        page: Some(page.page),
        total_pages: Some(page.total_pages),
        total_results: Some(page.total_results),
        results: Some(
            page.results
                .into_iter()
                .map(|item| normalize_item(item, fallback_media))
                .collect(),
        ),
        ..FeedResponse::default()
    }
}

/// Maps the TMDB `media_type` string.
fn parse_media_type(value: &str) -> MediaType {
    match value {
        "movie" => MediaType::Movie,
        "tv" => MediaType::Tv,
        "person" => MediaType::Person,
        _ => MediaType::Other,
    }
}

/// Rounds a vote average to one decimal.
fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Treats empty strings like missing values (TMDB sends `""` for unknown dates).
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
