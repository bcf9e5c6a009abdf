//! Checkout wizard route handlers.
//!
//! Each data-entry step accepts a JSON body, runs the step validation
//! behind the simulated latency, and answers with either the issued token
//! or a 400 carrying the rejection message verbatim. A body that fails to
//! decode is answered before business validation runs.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use wavecart_core::{
    AccountFields, AccountId, OrderConfirmation, OrderSummary, PaymentFields, PaymentId,
    ShippingFields, ShippingId,
};

use crate::error::Result;
use crate::state::AppState;

/// Completion request: the three tokens issued by the accepted steps.
///
/// Fields default to empty so an absent token and an empty token are
/// treated the same by the presence check.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompleteRequest {
    pub account_id: String,
    pub shipping_id: String,
    pub payment_id: String,
}

/// Success body for the account step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub success: bool,
    pub message: &'static str,
    pub account_id: AccountId,
}

/// Success body for the shipping step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingResponse {
    pub success: bool,
    pub message: &'static str,
    pub shipping_id: ShippingId,
}

/// Success body for the payment step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub success: bool,
    pub message: &'static str,
    pub payment_id: PaymentId,
}

/// Success body for order completion.
#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub order: OrderConfirmation,
}

/// Validate the account step.
#[instrument(skip_all)]
pub async fn account(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AccountFields>, JsonRejection>,
) -> Result<Json<AccountResponse>> {
    let Json(fields) = payload?;

    let account_id = state.steps().verify_account(&fields).await?;
    tracing::info!(%account_id, "account step accepted");

    Ok(Json(AccountResponse {
        success: true,
        message: "Account verified successfully",
        account_id,
    }))
}

/// Validate the shipping step.
#[instrument(skip_all)]
pub async fn shipping(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShippingFields>, JsonRejection>,
) -> Result<Json<ShippingResponse>> {
    let Json(fields) = payload?;

    let shipping_id = state.steps().verify_shipping(&fields).await?;
    tracing::info!(%shipping_id, "shipping step accepted");

    Ok(Json(ShippingResponse {
        success: true,
        message: "Shipping address verified",
        shipping_id,
    }))
}

/// Process the payment step.
#[instrument(skip_all)]
pub async fn payment(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PaymentFields>, JsonRejection>,
) -> Result<Json<PaymentResponse>> {
    let Json(fields) = payload?;

    let payment_id = state.steps().process_payment(&fields).await?;
    tracing::info!(%payment_id, "payment step accepted");

    Ok(Json(PaymentResponse {
        success: true,
        message: "Payment processed successfully",
        payment_id,
    }))
}

/// Complete the order from the three step tokens.
#[instrument(skip_all)]
pub async fn complete(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CompleteRequest>, JsonRejection>,
) -> Result<Json<CompleteResponse>> {
    let Json(request) = payload?;

    let order = state
        .steps()
        .complete_order(&request.account_id, &request.shipping_id, &request.payment_id)
        .await?;
    tracing::info!(order_id = %order.order_id, "order completed");

    Ok(Json(CompleteResponse {
        success: true,
        message: "Order completed successfully",
        order,
    }))
}

/// The static order summary. Idempotent; always the same content.
#[instrument(skip_all)]
pub async fn summary(State(state): State<AppState>) -> Json<OrderSummary> {
    Json(state.steps().order_summary().await)
}
