//! The simulated step-processing service.
//!
//! Each operation pauses for the configured latency, runs the core
//! validator with the demo rejection policy, and on acceptance mints an
//! opaque token. Tokens are a step prefix plus the issue timestamp and a
//! per-process counter, unique within a run.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use wavecart_core::checkout::{
    AccountError, CompletionError, DemoPolicy, PaymentError, ShippingError, validate_account,
    validate_completion, validate_payment, validate_shipping,
};
use wavecart_core::{
    AccountFields, AccountId, OrderConfirmation, OrderId, OrderSummary, PaymentFields, PaymentId,
    ShippingFields, ShippingId,
};

use super::latency::Latency;

/// Validates step submissions and issues tokens.
pub struct StepService {
    latency: Latency,
    policy: DemoPolicy,
    counter: AtomicU64,
}

impl StepService {
    /// Create a service with the given delay policy.
    #[must_use]
    pub const fn new(latency: Latency) -> Self {
        Self {
            latency,
            policy: DemoPolicy,
            counter: AtomicU64::new(0),
        }
    }

    /// Verify the account step and issue an account token.
    ///
    /// # Errors
    ///
    /// Returns the rejection to surface to the shopper.
    pub async fn verify_account(&self, fields: &AccountFields) -> Result<AccountId, AccountError> {
        self.latency.pause().await;
        validate_account(fields, &self.policy)?;
        Ok(AccountId::new(self.issue(AccountId::PREFIX)))
    }

    /// Verify the shipping step and issue a shipping token.
    ///
    /// # Errors
    ///
    /// Returns the rejection to surface to the shopper.
    pub async fn verify_shipping(
        &self,
        fields: &ShippingFields,
    ) -> Result<ShippingId, ShippingError> {
        self.latency.pause().await;
        validate_shipping(fields, &self.policy)?;
        Ok(ShippingId::new(self.issue(ShippingId::PREFIX)))
    }

    /// Process the payment step and issue a payment token.
    ///
    /// # Errors
    ///
    /// Returns the rejection to surface to the shopper.
    pub async fn process_payment(&self, fields: &PaymentFields) -> Result<PaymentId, PaymentError> {
        self.latency.pause().await;
        validate_payment(fields, &self.policy)?;
        Ok(PaymentId::new(self.issue(PaymentId::PREFIX)))
    }

    /// Complete the order once all three step tokens are present.
    ///
    /// # Errors
    ///
    /// Returns `MissingInformation` if any token is absent.
    pub async fn complete_order(
        &self,
        account_id: &str,
        shipping_id: &str,
        payment_id: &str,
    ) -> Result<OrderConfirmation, CompletionError> {
        self.latency.pause().await;
        validate_completion(account_id, shipping_id, payment_id)?;

        let order_id = OrderId::new(self.issue(OrderId::PREFIX));
        Ok(OrderConfirmation::issued_at(order_id, Utc::now()))
    }

    /// The static order summary. Always succeeds, always identical.
    pub async fn order_summary(&self) -> OrderSummary {
        self.latency.pause().await;
        OrderSummary::demo()
    }

    /// Mint a token: prefix, issue timestamp, per-process sequence.
    fn issue(&self, prefix: &str) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}{}-{seq}", Utc::now().timestamp_millis())
    }
}
