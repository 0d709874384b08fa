use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    api::{Result, error::ApiError},
    config::Config,
    gateway::mask,
};

const SIGNATURE_HEADER: &str = "flutterwave-signature";

#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    pub event: String,
    pub data: serde_json::Value,
    pub meta_data: Option<serde_json::Value>,
}

/// Flutterwave pushes transaction-state events here. The signature header
/// must equal the configured secret hash; a missing or mismatched signature
/// is rejected outright with 401 and the payload is never processed. Events
/// are acknowledged with 200 regardless of type; no dispatch happens here.
#[instrument(skip_all)]
pub async fn receive(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> Result<StatusCode> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    if signature != Some(config.flw_secret_hash.as_str()) {
        tracing::warn!("Rejected webhook with missing or mismatched signature");
        return Ok(StatusCode::UNAUTHORIZED);
    }

    tracing::debug!(data = %mask::secure_value(&body), "Received Flutterwave webhook");

    let Ok(event) = serde_json::from_value::<WebhookEvent>(body) else {
        tracing::warn!("Failed to deserialize webhook body");
        return Err(ApiError::internal("Webhook handler failed"));
    };
    tracing::info!(event = %event.event, "Acknowledged Flutterwave webhook");
    Ok(StatusCode::OK)
}
