//! Core types for Wavecart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod currency;
pub mod email;
pub mod fields;
pub mod summary;
pub mod token;

pub use currency::{CurrencyCode, from_cents};
pub use email::{Email, EmailError};
pub use fields::{
    AccountFields, PaymentFields, ShippingFields, ShippingMethod, UnknownShippingMethod,
};
pub use summary::{DELIVERY_ESTIMATE_DAYS, LineItem, OrderConfirmation, OrderSummary};
pub use token::*;
