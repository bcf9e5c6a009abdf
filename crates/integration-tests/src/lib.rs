//! Integration test support for Wavecart.
//!
//! Provides [`HttpProcessor`], a [`StepProcessor`] backed by a running
//! checkout server over HTTP. The end-to-end tests in `tests/` drive the
//! same orchestrator the clients use, pointed at a real server.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the checkout server
//! cargo run -p wavecart-checkout
//!
//! # Run integration tests
//! cargo test -p wavecart-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde::Serialize;
use serde_json::Value;

use wavecart_core::checkout::{StepOutcome, StepProcessor, TransportError};
use wavecart_core::{
    AccountFields, AccountId, OrderConfirmation, OrderSummary, PaymentFields, PaymentId,
    ShippingFields, ShippingId,
};

/// Base URL for the checkout API (configurable via environment).
#[must_use]
pub fn checkout_base_url() -> String {
    std::env::var("CHECKOUT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// A step processor that talks to a running checkout server.
pub struct HttpProcessor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProcessor {
    /// Create a processor against the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a processor against the URL from `CHECKOUT_BASE_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(checkout_base_url())
    }

    /// POST a step body and split the response into outcome or rejection.
    ///
    /// A 4xx with an `error` field is a rejection, not a failure; anything
    /// else that is not a 200 is a transport error.
    async fn post_step<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<StepOutcome<Value>, TransportError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let value: Value = response
            .json()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        if status.is_success() {
            return Ok(StepOutcome::Accepted(value));
        }

        match value.get("error").and_then(Value::as_str) {
            Some(reason) if status.is_client_error() => {
                Ok(StepOutcome::Rejected(reason.to_owned()))
            }
            _ => Err(TransportError::new(format!("unexpected status {status}"))),
        }
    }
}

fn token_field(value: &Value, key: &str) -> Result<String, TransportError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| TransportError::new(format!("response missing {key}")))
}

impl StepProcessor for HttpProcessor {
    async fn submit_account(
        &self,
        fields: &AccountFields,
    ) -> Result<StepOutcome<AccountId>, TransportError> {
        Ok(match self.post_step("/api/checkout/account", fields).await? {
            StepOutcome::Accepted(value) => {
                StepOutcome::Accepted(AccountId::new(token_field(&value, "accountId")?))
            }
            StepOutcome::Rejected(reason) => StepOutcome::Rejected(reason),
        })
    }

    async fn submit_shipping(
        &self,
        fields: &ShippingFields,
    ) -> Result<StepOutcome<ShippingId>, TransportError> {
        Ok(
            match self.post_step("/api/checkout/shipping", fields).await? {
                StepOutcome::Accepted(value) => {
                    StepOutcome::Accepted(ShippingId::new(token_field(&value, "shippingId")?))
                }
                StepOutcome::Rejected(reason) => StepOutcome::Rejected(reason),
            },
        )
    }

    async fn submit_payment(
        &self,
        fields: &PaymentFields,
    ) -> Result<StepOutcome<PaymentId>, TransportError> {
        Ok(match self.post_step("/api/checkout/payment", fields).await? {
            StepOutcome::Accepted(value) => {
                StepOutcome::Accepted(PaymentId::new(token_field(&value, "paymentId")?))
            }
            StepOutcome::Rejected(reason) => StepOutcome::Rejected(reason),
        })
    }

    async fn complete_order(
        &self,
        account_id: &AccountId,
        shipping_id: &ShippingId,
        payment_id: &PaymentId,
    ) -> Result<StepOutcome<OrderConfirmation>, TransportError> {
        let body = serde_json::json!({
            "accountId": account_id,
            "shippingId": shipping_id,
            "paymentId": payment_id,
        });

        Ok(
            match self.post_step("/api/checkout/complete", &body).await? {
                StepOutcome::Accepted(value) => {
                    let order: OrderConfirmation = serde_json::from_value(value)
                        .map_err(|e| TransportError::new(e.to_string()))?;
                    StepOutcome::Accepted(order)
                }
                StepOutcome::Rejected(reason) => StepOutcome::Rejected(reason),
            },
        )
    }

    async fn order_summary(&self) -> Result<OrderSummary, TransportError> {
        let response = self
            .client
            .get(format!("{}/api/checkout/summary", self.base_url))
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::new(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::new(e.to_string()))
    }
}
