//! TMDB genre ID lookup.
//!
//! TMDB returns only genre IDs in list responses. The table covers the
//! movie and TV genre lists of API v3 (English names).

/// Genre ID to name table.
const GENRES: &[(u32, &str)] = &[
    (12, "Adventure"),
    (14, "Fantasy"),
    (16, "Animation"),
    (18, "Drama"),
    (27, "Horror"),
    (28, "Action"),
    (35, "Comedy"),
    (36, "History"),
    (37, "Western"),
    (53, "Thriller"),
    (80, "Crime"),
    (99, "Documentary"),
    (878, "Science Fiction"),
    (9648, "Mystery"),
    (10402, "Music"),
    (10749, "Romance"),
    (10751, "Family"),
    (10752, "War"),
    (10759, "Action & Adventure"),
    (10762, "Kids"),
    (10763, "News"),
    (10764, "Reality"),
    (10765, "Sci-Fi & Fantasy"),
    (10766, "Soap"),
    (10767, "Talk"),
    (10768, "War & Politics"),
    (10770, "TV Movie"),
];

/// Returns the genre name for a TMDB genre ID.
#[must_use]
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRES
        .binary_search_by_key(&id, |&(gid, _)| gid)
        .ok()
        .and_then(|idx| GENRES.get(idx))
        .map(|&(_, name)| name)
}

/// Resolves genre IDs to names, skipping unknown IDs.
#[must_use]
pub fn genre_names(ids: &[u32]) -> Vec<&'static str> {
    ids.iter().filter_map(|&id| genre_name(id)).collect()
}
