//! HTTP route handlers for the checkout server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Checkout wizard
//! POST /api/checkout/account   - Validate account step, issue account token
//! POST /api/checkout/shipping  - Validate shipping step, issue shipping token
//! POST /api/checkout/payment   - Validate payment step, issue payment token
//! POST /api/checkout/complete  - Complete the order from the three tokens
//! GET  /api/checkout/summary   - Static order summary
//! ```
//!
//! Every failure response is `400 {"error": "<message>"}`; every success
//! is `200` with `success: true` and the operation's payload.

pub mod checkout;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the checkout wizard routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/account", post(checkout::account))
        .route("/shipping", post(checkout::shipping))
        .route("/payment", post(checkout::payment))
        .route("/complete", post(checkout::complete))
        .route("/summary", get(checkout::summary))
}

/// Create all routes for the checkout server.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api/checkout", checkout_routes())
}
