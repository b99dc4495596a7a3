//! Router and handlers of the feed endpoint.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use cinescope_api::tmdb::{TmdbApi, TmdbPage, normalize_page};

use crate::ProxyState;
use crate::request::{FeedParams, FeedRequest};

/// Builds the feed router.
pub fn build_router<T>(state: Arc<ProxyState<T>>) -> Router
where
    T: TmdbApi + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handle_feed::<T>)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// Answers CORS preflight requests.
async fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
    )
        .into_response()
}

async fn method_not_allowed() -> Response {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &json!({"error": "Method not allowed"}),
    )
}

async fn handle_feed<T>(
    State(state): State<Arc<ProxyState<T>>>,
    Query(params): Query<FeedParams>,
) -> Response
where
    T: TmdbApi + Send + Sync + 'static,
{
    let Some(tmdb) = state.tmdb.as_ref() else {
        tracing::error!("feed request rejected: TMDB token is not configured");
        return json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &json!({
                "error": "TMDB API key not configured",
                "message": "Set TMDB_API_TOKEN before starting the server",
            }),
        );
    };

    let request = match FeedRequest::parse(&params) {
        Ok(request) => request,
        Err(rejection) => {
            tracing::debug!(?rejection, "feed request rejected");
            return json_response(
                StatusCode::BAD_REQUEST,
                &json!({"error": rejection.message()}),
            );
        }
    };

    match fetch_upstream(tmdb, &request, &state.language).await {
        Ok(page) => {
            let body = normalize_page(page, request.default_media_type());
            tracing::info!(
                ?request,
                count = body.results.as_ref().map_or(0, Vec::len),
                "feed request served"
            );
            json_response(StatusCode::OK, &body)
        }
        Err(e) => {
            tracing::error!(?request, error = %format!("{e:#}"), "TMDB request failed");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({
                    "error": "Failed to fetch data from TMDB",
                    "details": format!("{e:#}"),
                }),
            )
        }
    }
}

async fn fetch_upstream<T>(tmdb: &T, request: &FeedRequest, language: &str) -> Result<TmdbPage>
where
    T: TmdbApi + Sync,
{
    match request {
        FeedRequest::List { category, page } => tmdb.list(*category, language, *page).await,
        FeedRequest::Search { query, page } => tmdb.search_multi(query, language, *page).await,
    }
}

/// Serializes `body` as JSON with the permissive CORS origin header.
fn json_response<B: Serialize>(status: StatusCode, body: &B) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
