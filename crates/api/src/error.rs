use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use factory_health_core::error::CoreError;
use serde_json::json;

/// Fixed message returned for any malformed scoring request.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input format";

/// Application-level error type for HTTP handlers.
///
/// Scoring itself never fails; these cover malformed bodies and catalog
/// lookups for names outside the taxonomy. Every variant renders as a JSON
/// `{ "error": message }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A taxonomy lookup miss from `factory_health_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The `/machine-health` body did not have the expected shape.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::UnknownMachine(_) | CoreError::UnknownPart { .. } => {
                    (StatusCode::NOT_FOUND, core.to_string())
                }
            },
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        tracing::debug!(status = %status, error = %message, "Rejected request");

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
