use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Request-level errors for the events platform
///
/// Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl below
/// maps each variant to its status code and `{success:false, message}` body.
/// Store faults are logged and surface as a generic 500 with no internal
/// detail leaked to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Invalid event ID")]
    InvalidEventId,

    #[error("Event not found")]
    EventNotFound,

    #[error("Missing data.")]
    MissingData,

    #[error("Already joined.")]
    AlreadyJoined,

    #[error("Join record not found.")]
    NotJoined,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields
            | ApiError::InvalidEventId
            | ApiError::MissingData
            | ApiError::AlreadyJoined => StatusCode::BAD_REQUEST,
            ApiError::EventNotFound | ApiError::NotJoined => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
