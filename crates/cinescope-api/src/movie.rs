//! Uniform movie record shared by the feed client, the proxy and the page.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize};

/// Artwork shown whenever a title has no usable poster or backdrop.
pub const FALLBACK_ARTWORK_URL: &str = "https://placehold.co/500x750?text=No+Image";

/// Public TMDB website, used to build detail page links.
const TMDB_SITE_URL: &str = "https://www.themoviedb.org";

/// Feed category requested with the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Weekly trending titles (movies and series).
    Trending,
    /// Highest rated movies.
    TopRated,
    /// Popular movies.
    Movies,
    /// Popular TV series.
    Series,
}

impl Category {
    /// All categories, in wire order.
    pub const ALL: [Self; 4] = [Self::Trending, Self::TopRated, Self::Movies, Self::Series];

    /// Wire value of the `type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::TopRated => "top_rated",
            Self::Movies => "movies",
            Self::Series => "series",
        }
    }

    /// Media type assumed for items that do not carry one.
    #[must_use]
    pub const fn default_media_type(self) -> MediaType {
        match self {
            Self::Series => MediaType::Tv,
            Self::Trending | Self::TopRated | Self::Movies => MediaType::Movie,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "trending" => Ok(Self::Trending),
            "top_rated" => Ok(Self::TopRated),
            "movies" => Ok(Self::Movies),
            "series" => Ok(Self::Series),
            other => bail!("unknown feed category: {other}"),
        }
    }
}

/// Kind of title a feed item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature film.
    Movie,
    /// TV series.
    Tv,
    /// Person (returned by multi search).
    Person,
    /// Anything else TMDB may add later.
    #[serde(other)]
    Other,
}

impl MediaType {
    /// Wire value (`movie`, `tv`, `person`, `other`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
            Self::Other => "other",
        }
    }

    /// Path segment used on the TMDB website.
    const fn site_segment(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Person => "person",
            Self::Movie | Self::Other => "movie",
        }
    }
}

/// A movie or series as delivered by the feed endpoint.
///
/// Every field except `id` tolerates being absent or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// TMDB ID.
    pub id: u64,
    /// Localized title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Absolute poster URL.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Absolute backdrop URL.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Vote average, one decimal.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: Option<u64>,
    /// Release or first air date (YYYY-MM-DD).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Release year, empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    /// Movie or TV series.
    #[serde(default)]
    pub media_type: Option<MediaType>,
    /// TMDB genre IDs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adult: bool,
    /// Popularity score.
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl Movie {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            original_title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            rating: 0.0,
            vote_count: None,
            release_date: None,
            year: String::new(),
            media_type: None,
            genre_ids: Vec::new(),
            adult: false,
            popularity: None,
        }
    }

    /// Link to the title on themoviedb.org.
    #[must_use]
    pub fn tmdb_url(&self) -> String {
        let segment = self.media_type.unwrap_or(MediaType::Movie).site_segment();
        format!("{TMDB_SITE_URL}/{segment}/{}", self.id)
    }

    /// Poster URL, or the fallback artwork when none is set.
    #[must_use]
    pub fn poster_or_fallback(&self) -> &str {
        self.poster_path.as_deref().unwrap_or(FALLBACK_ARTWORK_URL)
    }

    /// Backdrop URL, or the fallback artwork when none is set.
    #[must_use]
    pub fn backdrop_or_fallback(&self) -> &str {
        self.backdrop_path.as_deref().unwrap_or(FALLBACK_ARTWORK_URL)
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
