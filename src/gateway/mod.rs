use axum::response::IntoResponse;
use reqwest::StatusCode;

use crate::{
    config::Config,
    gateway::{auth::authenticated_headers, error::GatewayError},
};

mod auth;
pub mod error;
/// Masking of account identifiers in logged payloads
pub mod mask;
/// Outgoing bill-payment payload
pub mod payment;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// A successful upstream response, relayed as-is: whatever status code and
/// JSON body Flutterwave produced.
#[derive(Debug)]
pub struct Relayed {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl IntoResponse for Relayed {
    fn into_response(self) -> axum::response::Response {
        (self.status, axum::Json(self.body)).into_response()
    }
}

#[derive(Debug, Clone)]
pub struct FlutterwaveGateway {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl FlutterwaveGateway {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            base_url: config.flw_base_url.clone(),
            secret_key: config.flw_secret_key.clone(),
        }
    }

    pub async fn bill_categories(&self, country: &str) -> Result<Relayed> {
        let url = format!("{}/top-bill-categories", self.base_url);
        self.relay_get(url, &[("country", country)]).await
    }

    /// List billers, scoped to a category when one is requested. `country` is
    /// carried either way.
    pub async fn billers(&self, category: Option<&str>, country: &str) -> Result<Relayed> {
        let url = match category {
            Some(category) => format!("{}/bills/{category}/billers", self.base_url),
            None => format!("{}/billers", self.base_url),
        };
        self.relay_get(url, &[("country", country)]).await
    }

    pub async fn bill_items(&self, biller_code: &str) -> Result<Relayed> {
        let url = format!("{}/billers/{biller_code}/items", self.base_url);
        self.relay_get(url, &[]).await
    }

    pub async fn initiate_payment(
        &self,
        biller_code: &str,
        item_code: &str,
        request: &payment::BillPaymentRequest<'_>,
    ) -> Result<Relayed> {
        let url = format!(
            "{}/billers/{biller_code}/items/{item_code}/payment",
            self.base_url
        );
        let secured_request = mask::secure_serializable(request);
        tracing::debug!(%url, data = %secured_request, "Flutterwave payment request");
        let res = self
            .client
            .post(&url)
            .headers(authenticated_headers(&self.secret_key))
            .json(request)
            .send()
            .await?;
        self.read_relayed(res).await
    }

    pub async fn verify_transaction(&self, tx_ref: &str) -> Result<Relayed> {
        let url = format!("{}/transactions/verify_by_reference", self.base_url);
        self.relay_get(url, &[("tx_ref", tx_ref)]).await
    }

    async fn relay_get(&self, url: String, query: &[(&str, &str)]) -> Result<Relayed> {
        tracing::debug!(%url, ?query, "Flutterwave API request");
        let res = self
            .client
            .get(&url)
            .headers(authenticated_headers(&self.secret_key))
            .query(query)
            .send()
            .await?;
        self.read_relayed(res).await
    }

    async fn read_relayed(&self, res: reqwest::Response) -> Result<Relayed> {
        let status = res.status();
        let body = res.json::<serde_json::Value>().await?;
        tracing::debug!(%status, data = %mask::secure_value(&body), "Flutterwave API response");
        if status.is_success() {
            Ok(Relayed { status, body })
        } else {
            Err(GatewayError::Upstream { status, body })
        }
    }
}
