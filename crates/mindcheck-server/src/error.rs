//! HTTP mapping for errors that escape a handler.
//!
//! Prediction input problems never reach this point (they are rendered as
//! messages); what remains are store and template failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mindcheck_core::error::MindcheckError;

/// Error returned from route handlers.
#[derive(Debug)]
pub struct ServerError(pub MindcheckError);

impl From<MindcheckError> for ServerError {
    fn from(err: MindcheckError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("[Server] Request failed: {}", self.0);
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        (
            status,
            Json(serde_json::json!({
                "error": "Internal server error",
                "status": status.as_u16(),
            })),
        )
            .into_response()
    }
}

pub type ServerResult<T> = std::result::Result<T, ServerError>;
