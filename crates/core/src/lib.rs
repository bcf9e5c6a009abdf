//! Wavecart Core - Shared types and checkout domain logic.
//!
//! This crate provides the types and wizard logic used across all Wavecart
//! components:
//! - `checkout` - The demo checkout server (HTTP boundary)
//! - `integration-tests` - End-to-end tests driving a running server
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP clients,
//! no clocks beyond what callers pass in. This keeps it lightweight and
//! allows the checkout state machine to be exercised anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe tokens, emails, currency,
//!   step field records, and the static order summary
//! - [`checkout`] - Step validation, the rejection policy hook, the
//!   `CheckoutSession` state machine, and the wizard orchestrator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod types;

pub use types::*;
