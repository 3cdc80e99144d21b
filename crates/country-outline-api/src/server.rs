//! HTTP surface — axum router, CORS, and the outline endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use country_outline::{outline_for_country, OutlineError};

/// Shared server state passed to all handlers via axum State. One outbound
/// client reused across requests; no other shared mutable state.
pub struct AppState {
    pub client: reqwest::Client,
}

/// Query parameters for the outline endpoint.
#[derive(Debug, Deserialize)]
pub struct OutlineParams {
    /// Free-text country name; spaces allowed.
    pub country: String,
}

/// Build the axum Router with the outline endpoint and a health probe.
/// CORS is wide open for GET so any web client can call the API.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/outline", get(handle_outline))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Bind the given address and serve requests until shutdown.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let client = country_outline::build_client()?;
    let app = router(Arc::new(AppState { client }));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("country outline API listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Fetch a country's article and respond with its Markdown outline as
/// `text/plain; charset=utf-8`.
async fn handle_outline(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OutlineParams>,
) -> Response {
    match outline_for_country(&state.client, &params.country).await {
        Ok(markdown) => (StatusCode::OK, markdown).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Translate a classified failure to its HTTP status at the request
/// boundary. Nothing is retried and partial results never escape.
fn error_response(err: &OutlineError) -> Response {
    let status = match err {
        OutlineError::NotFound(_) => StatusCode::NOT_FOUND,
        OutlineError::FetchFailed(_)
        | OutlineError::ContentRegionMissing
        | OutlineError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string()).into_response()
}

/// Health check endpoint.
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = error_response(&OutlineError::NotFound("Atlantis".into()));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_fetch_failure_maps_to_500() {
        let resp = error_response(&OutlineError::FetchFailed("connection reset".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_content_region_maps_to_500() {
        let resp = error_response(&OutlineError::ContentRegionMissing);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unexpected_maps_to_500() {
        let resp = error_response(&OutlineError::Unexpected("boom".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_names_the_country() {
        let err = OutlineError::NotFound("Atlantis".into());
        assert!(err.to_string().contains("Atlantis"));
    }
}
