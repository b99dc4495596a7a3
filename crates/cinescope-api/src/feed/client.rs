//! `FeedClient` - movie feed endpoint client.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::FeedApi;
use super::types::FeedResponse;
use crate::movie::{Category, Movie};

/// Default feed endpoint (the bind address of `cinescope serve`).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/";

/// Movie feed client.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FeedClient {
    /// HTTP client.
    http_client: Client,
    /// Feed endpoint URL.
    endpoint: Url,
}

/// Builder for `FeedClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FeedClientBuilder {
    endpoint: Option<Url>,
    user_agent: Option<String>,
}

impl FeedClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            endpoint: None,
            user_agent: None,
        }
    }

    /// Overrides the feed endpoint.
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<FeedClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let endpoint = if let Some(url) = self.endpoint {
            url
        } else {
            Url::parse(DEFAULT_ENDPOINT).context("invalid default feed endpoint")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(FeedClient {
            http_client,
            endpoint,
        })
    }
}

impl FeedClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> FeedClientBuilder {
        FeedClientBuilder::new()
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one GET to the endpoint and decodes the body.
    ///
    /// Errors on transport failure, a non-JSON body, an error marker in the
    /// body, or a non-success status without one.
    async fn get_feed(&self, query: &[(&str, &str)]) -> Result<Vec<Movie>> {
        let request = self
            .http_client
            .get(self.endpoint.clone())
            .query(query)
            .build()
            .context("failed to build feed request")?;

        tracing::debug!(url = %request.url(), "feed request");

        let response = self
            .http_client
            .execute(request)
            .await
            .context("feed request failed")?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read feed response body")?;

        let raw_result: std::result::Result<FeedResponse, _> = serde_json::from_str(&body);
        let parsed = raw_result
            .with_context(|| format!("failed to decode feed response (HTTP {status})"))?;

        if parsed.is_error() {
            bail!("feed error (HTTP {status}): {}", parsed.error_description());
        }
        if !status.is_success() {
            bail!("feed error (HTTP {status})");
        }

        Ok(parsed.results.unwrap_or_default())
    }

    /// Runs a feed request, logging and swallowing any failure.
    async fn get_movies_or_empty(&self, kind: &str, query: &[(&str, &str)]) -> Vec<Movie> {
        match self.get_feed(query).await {
            Ok(movies) => {
                tracing::debug!(kind, count = movies.len(), "feed response");
                movies
            }
            Err(e) => {
                tracing::warn!(kind, error = %format!("{e:#}"), "feed request failed, using empty list");
                Vec::new()
            }
        }
    }
}

impl FeedApi for FeedClient {
    #[instrument(skip(self))]
    async fn fetch_category(&self, category: Category) -> Vec<Movie> {
        self.get_movies_or_empty(category.as_str(), &[("type", category.as_str())])
            .await
    }

    #[instrument(skip(self))]
    async fn search_movies(&self, query: &str) -> Vec<Movie> {
        self.get_movies_or_empty("search", &[("type", "search"), ("query", query)])
            .await
    }

    #[instrument(skip(self))]
    async fn probe_artwork(&self, url: &str) -> bool {
        match self.http_client.head(url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::debug!(status = %response.status(), "artwork unavailable");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "artwork probe failed");
                false
            }
        }
    }
}
