use std::fmt::Display;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    api::{Json, Result, error::ApiError},
    gateway::{FlutterwaveGateway, Relayed, payment::BillPaymentRequest},
    state::AppState,
};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/categories", get(categories))
        .route("/billers", get(billers))
        .route("/billers/{biller_code}/items", get(items))
        .route("/pay", post(pay))
        .route("/verify", get(verify))
}

fn default_country() -> String {
    "NG".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    #[serde(default = "default_country")]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct BillersQuery {
    pub category: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub tx_ref: Option<String>,
}

/// Bill amount as callers send it: a JSON number or a numeric string. It is
/// forwarded upstream in string form either way.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl Amount {
    /// Zero and empty-string amounts count as missing.
    pub fn is_truthy(&self) -> bool {
        match self {
            Amount::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Amount::Text(s) => !s.is_empty(),
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Number(n) => n.fmt(f),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

/// Inbound payment body. Everything is optional at the deserialization layer;
/// the handler decides which absences are a 400.
#[derive(Debug, Deserialize)]
pub struct PayRequest {
    pub biller_code: Option<String>,
    pub item_code: Option<String>,
    pub amount: Option<Amount>,
    pub customer: Option<String>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub tx_ref: Option<String>,
    pub currency: Option<String>,
    pub country: Option<String>,
    pub callback_url: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[instrument(skip_all)]
async fn categories(
    State(flw): State<FlutterwaveGateway>,
    Query(query): Query<CategoriesQuery>,
) -> Result<Relayed> {
    Ok(flw
        .bill_categories(&query.country)
        .await
        .inspect_err(|e| tracing::error!("Failed to list bill categories: {e}"))?)
}

#[instrument(skip_all)]
async fn billers(
    State(flw): State<FlutterwaveGateway>,
    Query(query): Query<BillersQuery>,
) -> Result<Relayed> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    Ok(flw
        .billers(category, &query.country)
        .await
        .inspect_err(|e| tracing::error!("Failed to list billers: {e}"))?)
}

#[instrument(skip_all)]
async fn items(
    State(flw): State<FlutterwaveGateway>,
    Path(biller_code): Path<String>,
) -> Result<Relayed> {
    if biller_code.trim().is_empty() {
        return Err(ApiError::validation("biller_code required"));
    }
    Ok(flw
        .bill_items(&biller_code)
        .await
        .inspect_err(|e| tracing::error!("Failed to list bill items: {e}"))?)
}

#[instrument(skip_all)]
async fn pay(
    State(AppState { flw, config }): State<AppState>,
    Json(request): Json<PayRequest>,
) -> Result<Relayed> {
    let biller_code = request.biller_code.as_deref().filter(|v| !v.is_empty());
    let item_code = request.item_code.as_deref().filter(|v| !v.is_empty());
    let amount = request.amount.as_ref().filter(|a| a.is_truthy());
    let tx_ref = request.tx_ref.as_deref().filter(|v| !v.is_empty());
    let (Some(biller_code), Some(item_code), Some(amount), Some(tx_ref)) =
        (biller_code, item_code, amount, tx_ref)
    else {
        return Err(ApiError::validation(
            "biller_code, item_code, amount and tx_ref are required",
        ));
    };

    let payload =
        BillPaymentRequest::from_api(&request, amount, tx_ref, config.webhook_url.as_deref());
    Ok(flw
        .initiate_payment(biller_code, item_code, &payload)
        .await
        .inspect_err(|e| tracing::error!("Failed to initiate bill payment: {e}"))?)
}

#[instrument(skip_all)]
async fn verify(
    State(flw): State<FlutterwaveGateway>,
    Query(query): Query<VerifyQuery>,
) -> Result<Relayed> {
    let Some(tx_ref) = query.tx_ref.filter(|v| !v.is_empty()) else {
        return Err(ApiError::validation("tx_ref is required"));
    };
    Ok(flw
        .verify_transaction(&tx_ref)
        .await
        .inspect_err(|e| tracing::error!("Failed to verify transaction: {e}"))?)
}
