//! The wizard orchestrator.
//!
//! [`CheckoutFlow`] owns a [`CheckoutSession`] and drives it through a
//! [`StepProcessor`] - the boundary that actually accepts or rejects each
//! step (in production, the checkout server; in tests, anything). Every
//! submission is a single awaited call; taking `&mut self` per submission
//! means a session can never have two submissions in flight.

use crate::types::{
    AccountFields, AccountId, OrderConfirmation, OrderSummary, PaymentFields, PaymentId,
    ShippingFields, ShippingId,
};

use super::session::{CheckoutSession, CheckoutStep, TransitionError};

/// Generic failure message when the account call itself fails.
pub const ACCOUNT_SUBMIT_FAILED: &str = "Failed to validate account";
/// Generic failure message when the shipping call itself fails.
pub const SHIPPING_SUBMIT_FAILED: &str = "Failed to validate shipping";
/// Generic failure message when the payment call itself fails.
pub const PAYMENT_SUBMIT_FAILED: &str = "Failed to process payment";
/// Generic failure message when the completion call itself fails.
pub const COMPLETE_FAILED: &str = "Failed to complete order";
/// Generic failure message when the summary fetch fails.
pub const SUMMARY_FETCH_FAILED: &str = "Failed to fetch order summary";

/// Outcome of attempting to submit one step.
///
/// A rejection carries the verbatim user-facing reason; acceptance carries
/// whatever the step issues (a token, or the order confirmation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    Accepted(T),
    Rejected(String),
}

/// A failure of the submission channel itself (unreachable endpoint,
/// malformed response), as opposed to a rejection of the input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Wrap a transport-level failure description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The boundary that processes step submissions.
///
/// Implementations decide acceptance or rejection and issue tokens. A
/// rejection is a normal outcome; `Err` is reserved for transport
/// failures.
#[allow(async_fn_in_trait)] // the orchestrator is generic, no Send bound is required
pub trait StepProcessor {
    async fn submit_account(
        &self,
        fields: &AccountFields,
    ) -> Result<StepOutcome<AccountId>, TransportError>;

    async fn submit_shipping(
        &self,
        fields: &ShippingFields,
    ) -> Result<StepOutcome<ShippingId>, TransportError>;

    async fn submit_payment(
        &self,
        fields: &PaymentFields,
    ) -> Result<StepOutcome<PaymentId>, TransportError>;

    async fn complete_order(
        &self,
        account_id: &AccountId,
        shipping_id: &ShippingId,
        payment_id: &PaymentId,
    ) -> Result<StepOutcome<OrderConfirmation>, TransportError>;

    async fn order_summary(&self) -> Result<OrderSummary, TransportError>;
}

/// Sequences the three step submissions and the completion call, and owns
/// the session they accumulate into.
#[derive(Debug)]
pub struct CheckoutFlow<P> {
    processor: P,
    session: CheckoutSession,
}

impl<P: StepProcessor> CheckoutFlow<P> {
    /// Start a new checkout attempt against the given processor.
    pub fn new(processor: P) -> Self {
        Self {
            processor,
            session: CheckoutSession::new(),
        }
    }

    /// The session as accumulated so far.
    #[must_use]
    pub const fn session(&self) -> &CheckoutSession {
        &self.session
    }

    /// Consume the flow and keep the session.
    #[must_use]
    pub fn into_session(self) -> CheckoutSession {
        self.session
    }

    /// Submit the account step.
    ///
    /// On acceptance the session advances to shipping; on rejection or
    /// transport failure it stays put with `last_error` set.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the session is not at the account
    /// step.
    pub async fn submit_account(&mut self, fields: AccountFields) -> Result<(), TransitionError> {
        self.require_step(CheckoutStep::Account)?;
        self.session.clear_error();

        match self.processor.submit_account(&fields).await {
            Ok(StepOutcome::Accepted(id)) => self.session.accept_account(fields, id),
            Ok(StepOutcome::Rejected(reason)) => {
                self.session.reject(reason);
                Ok(())
            }
            Err(_) => {
                self.session.reject(ACCOUNT_SUBMIT_FAILED);
                Ok(())
            }
        }
    }

    /// Submit the shipping step.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the session is not at the shipping
    /// step.
    pub async fn submit_shipping(&mut self, fields: ShippingFields) -> Result<(), TransitionError> {
        self.require_step(CheckoutStep::Shipping)?;
        self.session.clear_error();

        match self.processor.submit_shipping(&fields).await {
            Ok(StepOutcome::Accepted(id)) => self.session.accept_shipping(fields, id),
            Ok(StepOutcome::Rejected(reason)) => {
                self.session.reject(reason);
                Ok(())
            }
            Err(_) => {
                self.session.reject(SHIPPING_SUBMIT_FAILED);
                Ok(())
            }
        }
    }

    /// Submit the payment step and, on acceptance, immediately attempt the
    /// completion call.
    ///
    /// Only a successful completion reaches `Complete`; a payment that was
    /// accepted but whose completion failed leaves the session at the
    /// payment step for a retry.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the session is not at the payment
    /// step.
    pub async fn submit_payment(&mut self, fields: PaymentFields) -> Result<(), TransitionError> {
        self.require_step(CheckoutStep::Payment)?;
        self.session.clear_error();

        match self.processor.submit_payment(&fields).await {
            Ok(StepOutcome::Accepted(id)) => {
                self.session.accept_payment(fields, id)?;
                self.complete().await
            }
            Ok(StepOutcome::Rejected(reason)) => {
                self.session.reject(reason);
                Ok(())
            }
            Err(_) => {
                self.session.reject(PAYMENT_SUBMIT_FAILED);
                Ok(())
            }
        }
    }

    /// Go back one step, keeping entered data for re-display.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] from the first step or after
    /// completion.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        self.session.back()
    }

    /// Fetch the static order summary.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] with the generic summary message if
    /// the fetch fails.
    pub async fn order_summary(&self) -> Result<OrderSummary, TransportError> {
        self.processor
            .order_summary()
            .await
            .map_err(|_| TransportError::new(SUMMARY_FETCH_FAILED))
    }

    async fn complete(&mut self) -> Result<(), TransitionError> {
        let Some((account_id, shipping_id, payment_id)) = self.session.completion_keys() else {
            return Err(TransitionError::PaymentPending);
        };

        match self
            .processor
            .complete_order(&account_id, &shipping_id, &payment_id)
            .await
        {
            Ok(StepOutcome::Accepted(order)) => self.session.confirm_order(order),
            Ok(StepOutcome::Rejected(reason)) => {
                self.session.reject(reason);
                Ok(())
            }
            Err(_) => {
                self.session.reject(COMPLETE_FAILED);
                Ok(())
            }
        }
    }

    fn require_step(&self, expected: CheckoutStep) -> Result<(), TransitionError> {
        let actual = self.session.step();
        if actual == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongStep { expected, actual })
        }
    }
}
