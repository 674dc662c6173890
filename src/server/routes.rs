//! Route handlers.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{Backend, Error, ParseOutput};

/// Sample article served to the UI's "Load Sample HTML".
pub const SAMPLE_HTML: &str = include_str!("../../assets/sample.html");

/// Body of `POST /api/parse`. Missing fields are empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub html: String,
    #[serde(default, rename = "parserType")]
    pub parser_type: String,
}

/// Uniform error payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure of a request, mapped onto a status code.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be read as a parse request.
    BadRequest(String),
    /// The extraction itself failed.
    Extraction(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Extraction(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Extraction(err) if err.is_client_error() => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Extraction(err) => {
                tracing::error!(error = %err, "error parsing article");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// `POST /api/parse`
pub async fn parse_handler(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseOutput>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(
        parser_type = %request.parser_type,
        html_len = request.html.len(),
        "parse request"
    );

    // DOM work is CPU-bound and the documents are not Send.
    let output = tokio::task::spawn_blocking(move || crate::parse(&request.html, &request.parser_type))
        .await
        .map_err(|err| Error::ExtractionFailure(format!("extraction task failed: {err}")))??;

    Ok(Json(output))
}

/// One entry of `GET /api/parsers`.
#[derive(Debug, Serialize)]
pub struct ParserInfo {
    pub key: &'static str,
    pub label: &'static str,
}

/// `GET /api/parsers`
pub async fn parsers_handler() -> Json<Vec<ParserInfo>> {
    Json(
        Backend::ALL
            .iter()
            .map(|backend| ParserInfo {
                key: backend.as_str(),
                label: backend.label(),
            })
            .collect(),
    )
}

/// `GET /api/sample`
pub async fn sample_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], SAMPLE_HTML)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
