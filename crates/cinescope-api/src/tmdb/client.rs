//! `TmdbClient` - upstream TMDB API v3 client used by the feed endpoint.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::TmdbApi;
use super::rate_limiter::RequestPacer;
use super::types::{TmdbErrorResponse, TmdbPage};
use crate::movie::Category;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Maximum number of retries for HTTP 429 responses.
const MAX_RETRIES: u32 = 3;

/// Backoff duration between retries.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// TMDB API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
    /// Request pacer shared by all calls.
    pacer: Arc<Mutex<RequestPacer>>,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            min_interval: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API read access token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set or empty.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_token = self
            .api_token
            .filter(|token| !token.is_empty())
            .context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL).context("invalid default base URL")?
        };

        let pacer = self
            .min_interval
            .map_or_else(RequestPacer::default_interval, RequestPacer::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
            pacer: Arc::new(Mutex::new(pacer)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends a paced GET with Bearer auth and decodes the JSON body.
    /// Retries up to `MAX_RETRIES` times on HTTP 429.
    #[instrument(skip(self, query))]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let mut retries = 0u32;
        loop {
            self.pacer.lock().await.pace().await;

            let request = self
                .http_client
                .get(url.clone())
                .bearer_auth(&self.api_token)
                .query(query)
                .build()
                .with_context(|| format!("failed to build request: {path}"))?;

            tracing::debug!(path, "TMDB API request");

            let response = self
                .http_client
                .execute(request)
                .await
                .with_context(|| format!("request failed: {path}"))?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    bail!("TMDB API rate limit exceeded after {MAX_RETRIES} retries: {path}");
                }
                tracing::warn!(
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(RETRY_BACKOFF.saturating_mul(retries)).await;
                continue;
            }

            let body = response
                .text()
                .await
                .with_context(|| format!("failed to read response body: {path}"))?;

            if !status.is_success() {
                if let Ok(error_response) = serde_json::from_str::<TmdbErrorResponse>(&body) {
                    bail!(
                        "TMDB API error (HTTP {}): code={}, message={}",
                        status,
                        error_response.status_code,
                        error_response.status_message,
                    );
                }
                bail!("TMDB API error (HTTP {status}): {body}");
            }

            return serde_json::from_str(&body)
                .with_context(|| format!("failed to decode JSON response: {path}"));
        }
    }
}

/// Upstream path of a category list.
const fn list_path(category: Category) -> &'static str {
    match category {
        Category::Trending => "trending/all/week",
        Category::TopRated => "movie/top_rated",
        Category::Movies => "movie/popular",
        Category::Series => "tv/popular",
    }
}

impl TmdbApi for TmdbClient {
    #[instrument(skip(self))]
    async fn list(&self, category: Category, language: &str, page: u32) -> Result<TmdbPage> {
        let query = [
            ("language", String::from(language)),
            ("page", page.to_string()),
        ];
        self.get_json(list_path(category), &query).await
    }

    #[instrument(skip(self))]
    async fn search_multi(&self, query: &str, language: &str, page: u32) -> Result<TmdbPage> {
        let query = [
            ("query", String::from(query)),
            ("language", String::from(language)),
            ("page", page.to_string()),
        ];
        self.get_json("search/multi", &query).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer, token: &str) -> TmdbClient {
        let base_url = format!("{}/3/", server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token(token)
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_token() {
        // Arrange & Act
        let result = TmdbClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api_token is required")
        );
    }

    #[test]
    fn test_builder_rejects_empty_api_token() {
        // Arrange & Act
        let result = TmdbClient::builder()
            .api_token("")
            .user_agent("test/0.0.0")
            .build();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = TmdbClient::builder().api_token("test-token").build();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_list_paths() {
        // Arrange & Act & Assert
        assert_eq!(list_path(Category::Trending), "trending/all/week");
        assert_eq!(list_path(Category::TopRated), "movie/top_rated");
        assert_eq!(list_path(Category::Movies), "movie/popular");
        assert_eq!(list_path(Category::Series), "tv/popular");
    }

    #[test]
    fn test_parse_trending_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/trending_all_week.json");

        // Act
        let page: TmdbPage = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].title.as_deref(), Some("Dune: Part Two"));
        assert_eq!(page.results[1].name.as_deref(), Some("Shōgun"));
        assert_eq!(page.results[2].media_type.as_deref(), Some("person"));
    }

    #[test]
    fn test_parse_error_response() {
        // Arrange
        let json = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let error: TmdbErrorResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(error.status_code, 7);
        assert!(error.status_message.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_trending_via_http() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/trending/all/week"))
            .and(query_param("language", "en-US"))
            .and(query_param("page", "1"))
            .and(header("Authorization", "Bearer my-secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../../fixtures/tmdb/trending_all_week.json"
            )))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, "my-secret-token");

        // Act
        let page = client.list(Category::Trending, "en-US", 1).await.unwrap();

        // Assert
        assert_eq!(page.total_results, 10_000);
        assert_eq!(page.results[0].id, 693_134);
    }

    #[tokio::test]
    async fn test_top_rated_via_http() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/top_rated"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../../fixtures/tmdb/movie_top_rated.json"
            )))
            .mount(&server)
            .await;
        let client = client_for(&server, "test-token");

        // Act
        let page = client.list(Category::TopRated, "en-US", 1).await.unwrap();

        // Assert
        assert_eq!(page.results.len(), 2);
        assert_eq!(
            page.results[0].title.as_deref(),
            Some("The Shawshank Redemption")
        );
    }

    #[tokio::test]
    async fn test_search_multi_via_http() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/multi"))
            .and(query_param("query", "dune"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../../fixtures/tmdb/search_multi_dune.json"
            )))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, "test-token");

        // Act
        let page = client.search_multi("dune", "en-US", 2).await.unwrap();

        // Assert
        assert_eq!(page.results.len(), 2);
    }

    #[tokio::test]
    async fn test_http_error_returns_tmdb_error() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(error_body))
            .mount(&server)
            .await;
        let client = client_for(&server, "invalid-token");

        // Act
        let result = client.list(Category::Movies, "en-US", 1).await;

        // Assert
        let err = result.unwrap_err().to_string();
        assert!(err.contains("TMDB API error"));
        assert!(err.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_http_429_retries() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":25,"status_message":"Your request count is over the allowed limit.","success":false}"#;

        // Initial request plus MAX_RETRIES retries
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string(error_body))
            .expect(u64::from(MAX_RETRIES) + 1)
            .mount(&server)
            .await;
        let client = client_for(&server, "test-token");

        // Act
        let result = client.search_multi("test", "en-US", 1).await;

        // Assert
        assert!(result.unwrap_err().to_string().contains("rate limit"));
    }
}
