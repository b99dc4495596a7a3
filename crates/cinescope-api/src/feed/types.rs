//! Feed endpoint wire types.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// Error marker of a feed response.
///
/// The endpoint reports failures either as a boolean flag or as an error
/// string; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorFlag {
    /// `"error": true`
    Flag(bool),
    /// `"error": "TMDB API key not configured"`
    Message(String),
}

impl ErrorFlag {
    /// Whether the marker signals a failure.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Message(msg) => !msg.is_empty(),
        }
    }
}

/// Body returned by the feed endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    /// Error marker (absent on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorFlag>,
    /// Human readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Upstream error details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// Total number of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    /// Normalized results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Movie>>,
}

impl FeedResponse {
    /// Whether the body carries an error marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.as_ref().is_some_and(ErrorFlag::is_set)
    }

    /// Best description of the failure for logs.
    #[must_use]
    pub fn error_description(&self) -> String {
        let error = match &self.error {
            Some(ErrorFlag::Message(msg)) => msg.as_str(),
            _ => "error flag set",
        };
        match (&self.message, &self.details) {
            (Some(message), _) => format!("{error}: {message}"),
            (None, Some(details)) => format!("{error}: {details}"),
            (None, None) => String::from(error),
        }
    }
}
