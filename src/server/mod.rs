//! HTTP boundary.
//!
//! `POST /api/parse` runs one extraction per request on the blocking pool
//! and answers with the result and its Markdown, or with `{"error": ...}`.

pub mod config;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use routes::{ApiError, ParseRequest, SAMPLE_HTML};

/// Build the application router.
pub fn build_app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/parse", post(routes::parse_handler))
        .route("/api/parsers", get(routes::parsers_handler))
        .route("/api/sample", get(routes::sample_handler))
        .route("/health", get(routes::health_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
