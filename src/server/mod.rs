//! HTTP front-end: route registration and response shaping.
//!
//! Thin collaborator around the harvest pipeline. The only interesting
//! decision here is error mapping: `InvalidInput` becomes a 400 and
//! `PageFetch` a 502, both as plain text; everything after headers are
//! committed is the pipeline's problem and degrades the archive rather
//! than the response.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::warn;

use crate::harvester::{HarvestError, Harvester};

/// JSON body accepted by `POST /save-proxy`.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub url: String,
}

/// Build the service router.
pub fn router(harvester: Arc<Harvester>) -> Router {
    Router::new()
        .route("/save-proxy", post(save_proxy))
        .route("/healthz", get(healthz))
        .with_state(harvester)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn healthz() -> &'static str {
    "ok"
}

async fn save_proxy(
    State(harvester): State<Arc<Harvester>>,
    Json(request): Json<SaveRequest>,
) -> Response {
    match harvester.harvest(&request.url).await {
        Ok(harvest) => archive_response(harvest.filename, harvest.stream),
        Err(err @ HarvestError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err @ HarvestError::PageFetch(_)) => {
            warn!(url = %request.url, error = %err, "page fetch failed");
            (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
        }
    }
}

fn archive_response(
    filename: String,
    stream: tokio_util::io::ReaderStream<tokio::io::DuplexStream>,
) -> Response {
    // The filename went through the sanitizer, so it is header-safe.
    let disposition = format!("attachment; filename=\"{filename}\"");

    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from_stream(stream))
    {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "failed to build archive response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
