use std::fmt::Display;

use reqwest::StatusCode;
use serde::de::Error;

#[derive(Debug)]
pub enum GatewayError {
    /// The request never produced an upstream response.
    Request(reqwest::Error),
    /// Upstream answered with a non-success status; the body is kept so it
    /// can be relayed verbatim.
    Upstream {
        status: StatusCode,
        body: serde_json::Value,
    },
    Decode(serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Decode(serde_json::Error::custom(
                "failed to decode response body",
            ));
        }
        Self::Request(value)
    }
}

impl std::error::Error for GatewayError {}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Request(e) => write!(f, "http request error: {e}"),
            GatewayError::Upstream { status, .. } => {
                write!(f, "upstream responded with status {status}")
            }
            GatewayError::Decode(e) => write!(f, "upstream response deserialization: {e}"),
        }
    }
}
