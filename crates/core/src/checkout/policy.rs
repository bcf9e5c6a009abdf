//! Business-rule rejection hooks.
//!
//! Field validation is fixed, but the "this email is taken" /
//! "card declined" class of rejection belongs to whatever backs the
//! checkout. The demo backs it with hardcoded trigger values; a real
//! implementation would substitute its own policy without touching the
//! state machine or the validators.

use crate::types::{AccountFields, PaymentFields, ShippingFields};

use super::validate::{AccountError, PaymentError, ShippingError};

/// Hook for business-rule rejections, consulted after a step's field
/// validation has passed.
///
/// Implementations must be deterministic for a given input; the default
/// for every method is to accept.
pub trait StepPolicy {
    /// Review an account submission that passed format checks.
    ///
    /// # Errors
    ///
    /// Returns the rejection to surface to the shopper.
    fn review_account(&self, _fields: &AccountFields) -> Result<(), AccountError> {
        Ok(())
    }

    /// Review a shipping submission that passed format checks.
    ///
    /// # Errors
    ///
    /// Returns the rejection to surface to the shopper.
    fn review_shipping(&self, _fields: &ShippingFields) -> Result<(), ShippingError> {
        Ok(())
    }

    /// Review a payment submission that passed format checks.
    ///
    /// # Errors
    ///
    /// Returns the rejection to surface to the shopper.
    fn review_payment(&self, _fields: &PaymentFields) -> Result<(), PaymentError> {
        Ok(())
    }
}

/// The demo policy: three hardcoded trigger values that deterministically
/// fail, so every rejection path can be exercised from the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoPolicy;

impl DemoPolicy {
    /// Email that reports a pre-existing account.
    pub const REGISTERED_EMAIL: &'static str = "error@test.com";
    /// Postcode that fails address verification.
    pub const REJECTED_POSTCODE: &'static str = "00000";
    /// Card number that the issuer declines.
    pub const DECLINED_CARD: &'static str = "4000000000000002";
}

impl StepPolicy for DemoPolicy {
    fn review_account(&self, fields: &AccountFields) -> Result<(), AccountError> {
        if fields.email == Self::REGISTERED_EMAIL {
            return Err(AccountError::AlreadyRegistered);
        }
        Ok(())
    }

    fn review_shipping(&self, fields: &ShippingFields) -> Result<(), ShippingError> {
        if fields.postcode == Self::REJECTED_POSTCODE {
            return Err(ShippingError::InvalidPostcode);
        }
        Ok(())
    }

    fn review_payment(&self, fields: &PaymentFields) -> Result<(), PaymentError> {
        if fields.card_number == Self::DECLINED_CARD {
            return Err(PaymentError::Declined);
        }
        Ok(())
    }
}

/// A policy with no business rules; every reviewed submission passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl StepPolicy for AllowAll {}
