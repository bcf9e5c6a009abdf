//! Checkout wizard logic.
//!
//! The wizard has four states (`Account`, `Shipping`, `Payment`,
//! `Complete`) and three data-entry steps. Each step's input is checked by
//! the validators in [`validate`], business-rule rejections are supplied by
//! a [`policy::StepPolicy`], accumulated progress lives in a
//! [`session::CheckoutSession`], and [`flow::CheckoutFlow`] sequences the
//! whole thing against a [`flow::StepProcessor`].

pub mod flow;
pub mod policy;
pub mod session;
pub mod validate;

pub use flow::{CheckoutFlow, StepOutcome, StepProcessor, TransportError};
pub use policy::{AllowAll, DemoPolicy, StepPolicy};
pub use session::{CheckoutSession, CheckoutStep, TransitionError};
pub use validate::{
    AccountError, CompletionError, PaymentError, ShippingError, validate_account,
    validate_completion, validate_payment, validate_shipping,
};
