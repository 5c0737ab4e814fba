use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::presentation::rest::dto::ErrorResponse;

/// API error type. Serializes to the `{success:false, error}` envelope.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Single catch-all body for rate lookup failures; details stay in the
    /// server log, not in the response.
    pub fn fetch_failed() -> Self {
        ApiError {
            message: "Error fetching rates".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}
