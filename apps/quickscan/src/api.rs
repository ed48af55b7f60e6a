//! # API Module
//!
//! The async bridge around the core pipeline, and the axum HTTP surface
//! that exposes it to non-Rust hosts.
//!
//! A well-formed request always yields HTTP 200 with one report; scan
//! failures travel inside the record, never as transport errors. Malformed
//! JSON and oversized bodies are rejected by the extractors before the
//! pipeline runs.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use quickscan_core::{ImagePayload, ScanError, ScanReport, Scanner};
use serde::Deserialize;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Base64 inflates images by 4/3, so this
/// bounds decoded payloads to roughly 12 MiB.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Server-surface failures (bind/serve). Scan failures never appear here.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared application state: one immutable scanner behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    scanner: Arc<Scanner>,
}

impl AppState {
    /// State with the default decoder backends.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: Arc::new(Scanner::new()),
        }
    }

    /// State around an existing scanner.
    #[must_use]
    pub fn with_scanner(scanner: Arc<Scanner>) -> Self {
        Self { scanner }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan request body: the image as a `data:` URL.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub image: String,
}

/// Forward one payload through the scan pipeline.
///
/// Resolves exactly once with the completion record, on success or failure
/// alike. The pipeline runs on the blocking pool; if the blocking task
/// itself dies, that failure is normalized into the same record shape.
pub async fn scan_image(scanner: Arc<Scanner>, payload: ImagePayload) -> ScanReport {
    let handle = tokio::task::spawn_blocking(move || scanner.scan_report(&payload));
    match handle.await {
        Ok(report) => report,
        Err(err) => ScanReport::failed(&ScanError::Decoder(err.to_string())),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Json<ScanReport> {
    let payload = ImagePayload::from_data_url(request.image);
    let report = scan_image(state.scanner.clone(), payload).await;
    if !report.success {
        tracing::debug!(
            error = report.error.as_deref().unwrap_or("unknown"),
            "scan failed"
        );
    }
    Json(report)
}

/// Build the HTTP router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/scan", post(scan))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: SocketAddr) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    tracing::info!(%addr, "quickscan API listening");

    axum::serve(listener, build_router(AppState::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
