//! Request error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use calc_ontology_core::CoreError;

/// Error reaching a request handler.
///
/// Everything here is an internal fault (resolver failure, template
/// render failure); all of it maps to a generic 500 so request
/// handling never crashes the process. Malformed request shapes
/// (missing form fields) are rejected by axum's extractors as client
/// errors before a handler runs.
#[derive(Debug)]
pub enum WebError {
    Core(CoreError),
    Template(askama::Error),
}

impl From<CoreError> for WebError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<askama::Error> for WebError {
    fn from(e: askama::Error) -> Self {
        Self::Template(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::Core(e) => error!(error = %e, "Request failed"),
            WebError::Template(e) => error!(error = %e, "Template rendering failed"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
