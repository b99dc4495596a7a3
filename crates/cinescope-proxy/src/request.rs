//! Feed query parameter parsing.

use serde::Deserialize;

use cinescope_api::{Category, MediaType};

/// Raw query string of a feed request.
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    /// `trending` (default), `top_rated`, `movies`, `series` or `search`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Search text, required for `type=search`.
    pub query: Option<String>,
    /// Result page (default 1).
    pub page: Option<String>,
}

/// A validated feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRequest {
    /// Category list.
    List {
        /// Requested category.
        category: Category,
        /// Result page.
        page: u32,
    },
    /// Multi search.
    Search {
        /// Search text.
        query: String,
        /// Result page.
        page: u32,
    },
}

/// Why a feed request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `type=search` without a query.
    MissingQuery,
    /// Unknown `type` value.
    InvalidType,
    /// `page` is not a positive integer.
    InvalidPage,
}

impl Rejection {
    /// Error message sent to the client.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingQuery => "Query parameter required for search",
            Self::InvalidType => "Invalid type parameter",
            Self::InvalidPage => "Invalid page parameter",
        }
    }
}

impl FeedRequest {
    /// Validates raw parameters.
    ///
    /// # Errors
    ///
    /// Returns the matching `Rejection` for an unknown type, a search
    /// without query, or a malformed page.
    pub fn parse(params: &FeedParams) -> Result<Self, Rejection> {
        let kind = params.kind.as_deref().unwrap_or("trending");

        if kind == "search" {
            let query = params
                .query
                .as_deref()
                .filter(|q| !q.is_empty())
                .ok_or(Rejection::MissingQuery)?;
            return Ok(Self::Search {
                query: String::from(query),
                page: parse_page(params.page.as_deref())?,
            });
        }

        let category = kind
            .parse::<Category>()
            .map_err(|_| Rejection::InvalidType)?;
        Ok(Self::List {
            category,
            page: parse_page(params.page.as_deref())?,
        })
    }

    /// Media type assumed for items without one.
    #[must_use]
    pub const fn default_media_type(&self) -> MediaType {
        match self {
            Self::List { category, .. } => category.default_media_type(),
            Self::Search { .. } => MediaType::Movie,
        }
    }
}

/// Parses the `page` parameter, defaulting to 1.
fn parse_page(raw: Option<&str>) -> Result<u32, Rejection> {
    match raw {
        None => Ok(1),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|&page| page >= 1)
            .ok_or(Rejection::InvalidPage),
    }
}
