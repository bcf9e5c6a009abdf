//! The checkout session state machine.
//!
//! A [`CheckoutSession`] is the in-memory record of one checkout attempt:
//! the current step, the field data entered so far, the tokens issued by
//! accepted steps, and the most recent rejection message. Nothing is ever
//! persisted; dropping the session discards the attempt.
//!
//! Transition rules:
//! - a step only advances when its token has been issued;
//! - `back()` regresses one step, is only allowed from `Shipping` and
//!   `Payment`, clears the error, and keeps entered data;
//! - the order confirmation is present if and only if the session is
//!   `Complete`, and `Complete` is terminal.

use serde::{Deserialize, Serialize};

use crate::types::{
    AccountFields, AccountId, OrderConfirmation, PaymentFields, PaymentId, ShippingFields,
    ShippingId,
};

/// One stage of the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    #[default]
    Account,
    Shipping,
    Payment,
    Complete,
}

impl CheckoutStep {
    /// The wire name of the step.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Shipping => "shipping",
            Self::Payment => "payment",
            Self::Complete => "complete",
        }
    }
}

impl core::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transition the state machine refuses to make.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// A step outcome was recorded against the wrong current step.
    #[error("expected step {expected}, session is at {actual}")]
    WrongStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },
    /// The completion outcome arrived before payment was accepted.
    #[error("payment has not been accepted yet")]
    PaymentPending,
    /// `back()` from the initial step.
    #[error("cannot go back from the first step")]
    AtFirstStep,
    /// Any transition out of the terminal step.
    #[error("checkout is already complete")]
    AlreadyComplete,
}

/// The in-memory record of a single checkout attempt.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    step: CheckoutStep,
    account: Option<AccountFields>,
    shipping: Option<ShippingFields>,
    payment: Option<PaymentFields>,
    account_id: Option<AccountId>,
    shipping_id: Option<ShippingId>,
    payment_id: Option<PaymentId>,
    order: Option<OrderConfirmation>,
    last_error: Option<String>,
}

impl CheckoutSession {
    /// Start a fresh checkout attempt at the account step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The step currently awaiting input.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Whether the wizard has reached its terminal state.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.step, CheckoutStep::Complete)
    }

    /// Account data entered so far, for re-display after back-navigation.
    #[must_use]
    pub const fn account(&self) -> Option<&AccountFields> {
        self.account.as_ref()
    }

    /// Shipping data entered so far.
    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingFields> {
        self.shipping.as_ref()
    }

    /// Payment data entered so far.
    #[must_use]
    pub const fn payment(&self) -> Option<&PaymentFields> {
        self.payment.as_ref()
    }

    /// Token issued by the accepted account step.
    #[must_use]
    pub const fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    /// Token issued by the accepted shipping step.
    #[must_use]
    pub const fn shipping_id(&self) -> Option<&ShippingId> {
        self.shipping_id.as_ref()
    }

    /// Token issued by the accepted payment step.
    #[must_use]
    pub const fn payment_id(&self) -> Option<&PaymentId> {
        self.payment_id.as_ref()
    }

    /// The order confirmation; present iff the session is complete.
    #[must_use]
    pub const fn order(&self) -> Option<&OrderConfirmation> {
        self.order.as_ref()
    }

    /// The most recent rejection message, if the last submission failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The three tokens needed by the completion call, once payment has
    /// been accepted.
    #[must_use]
    pub fn completion_keys(&self) -> Option<(AccountId, ShippingId, PaymentId)> {
        Some((
            self.account_id.clone()?,
            self.shipping_id.clone()?,
            self.payment_id.clone()?,
        ))
    }

    /// Record an accepted account submission and advance to shipping.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::WrongStep`] unless the session is at the
    /// account step.
    pub fn accept_account(
        &mut self,
        fields: AccountFields,
        id: AccountId,
    ) -> Result<(), TransitionError> {
        self.require(CheckoutStep::Account)?;
        self.account = Some(fields);
        self.account_id = Some(id);
        self.last_error = None;
        self.step = CheckoutStep::Shipping;
        Ok(())
    }

    /// Record an accepted shipping submission and advance to payment.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::WrongStep`] unless the session is at the
    /// shipping step.
    pub fn accept_shipping(
        &mut self,
        fields: ShippingFields,
        id: ShippingId,
    ) -> Result<(), TransitionError> {
        self.require(CheckoutStep::Shipping)?;
        self.shipping = Some(fields);
        self.shipping_id = Some(id);
        self.last_error = None;
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Record an accepted payment submission.
    ///
    /// The session stays at the payment step until the completion call
    /// succeeds; only [`confirm_order`](Self::confirm_order) reaches
    /// `Complete`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::WrongStep`] unless the session is at the
    /// payment step.
    pub fn accept_payment(
        &mut self,
        fields: PaymentFields,
        id: PaymentId,
    ) -> Result<(), TransitionError> {
        self.require(CheckoutStep::Payment)?;
        self.payment = Some(fields);
        self.payment_id = Some(id);
        self.last_error = None;
        Ok(())
    }

    /// Record the order confirmation and enter the terminal step.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::WrongStep`] unless the session is at the
    /// payment step, or [`TransitionError::PaymentPending`] if payment has
    /// not been accepted.
    pub fn confirm_order(&mut self, order: OrderConfirmation) -> Result<(), TransitionError> {
        self.require(CheckoutStep::Payment)?;
        if self.payment_id.is_none() {
            return Err(TransitionError::PaymentPending);
        }
        self.order = Some(order);
        self.last_error = None;
        self.step = CheckoutStep::Complete;
        Ok(())
    }

    /// Record a rejection: the session stays on its current step and the
    /// reason becomes [`last_error`](Self::last_error).
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.last_error = Some(reason.into());
    }

    /// Clear the rejection message ahead of a new submission.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Go back one step. Entered data is kept for re-display.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AtFirstStep`] at the account step and
    /// [`TransitionError::AlreadyComplete`] once the wizard has finished.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        self.step = match self.step {
            CheckoutStep::Account => return Err(TransitionError::AtFirstStep),
            CheckoutStep::Shipping => CheckoutStep::Account,
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Complete => return Err(TransitionError::AlreadyComplete),
        };
        self.last_error = None;
        Ok(())
    }

    fn require(&self, expected: CheckoutStep) -> Result<(), TransitionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}
