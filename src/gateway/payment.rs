use serde::Serialize;

use crate::api::bills::{Amount, PayRequest};

/// Outgoing bill-payment payload.
///
/// Keys with no resolved value are omitted entirely; the upstream API must
/// not receive explicit nulls on optional fields.
#[derive(Debug, Serialize)]
pub struct BillPaymentRequest<'a> {
    pub amount: String,
    pub tx_ref: &'a str,
    pub currency: &'a str,
    pub country: &'a str,
    pub customer: Customer<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct Customer<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> BillPaymentRequest<'a> {
    /// Build the upstream payload from a validated inbound request.
    ///
    /// `amount` and `tx_ref` are passed separately because the handler has
    /// already established their presence; `default_callback_url` is the
    /// deployment-wide webhook URL used when the caller did not supply one.
    pub fn from_api(
        request: &'a PayRequest,
        amount: &Amount,
        tx_ref: &'a str,
        default_callback_url: Option<&'a str>,
    ) -> Self {
        Self {
            amount: amount.to_string(),
            tx_ref,
            currency: non_empty(&request.currency).unwrap_or("NGN"),
            country: non_empty(&request.country).unwrap_or("NG"),
            customer: Customer {
                name: non_empty(&request.customer_name)
                    .or(non_empty(&request.customer))
                    .unwrap_or("Customer"),
                email: non_empty(&request.customer_email),
            },
            customer_number: non_empty(&request.customer),
            callback_url: non_empty(&request.callback_url).or(default_callback_url),
            metadata: request.metadata.as_ref(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
