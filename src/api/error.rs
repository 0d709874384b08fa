use axum::{http::StatusCode, response::IntoResponse};

use crate::gateway::error::GatewayError;

/// Error half of every handler: a status code plus the `{ "error": ... }`
/// body sent to the caller.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: serde_json::Value,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: serde_json::Value::String(message.into()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: serde_json::Value::String(message.into()),
        }
    }

    pub fn not_found(path: &impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: serde_json::Value::String(format!("Not found - {path}")),
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(value: GatewayError) -> Self {
        match value {
            // Non-success upstream answers keep their status; the body is
            // relayed inside the error envelope.
            GatewayError::Upstream { status, body } => Self {
                status,
                error: body,
            },
            GatewayError::Request(e) => Self::internal(e.to_string()),
            GatewayError::Decode(e) => Self::internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.error });
        (self.status, axum::Json(body)).into_response()
    }
}
