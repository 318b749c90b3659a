//! Payment route handlers.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printforge_core::OrderId;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::services::checkout::{CheckoutService, VerifiedOrder};
use crate::state::AppState;

/// Payment verification request, as posted by the gateway popup handler.
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    pub internal_order_id: OrderId,
}

/// Payment verification response.
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub order: VerifiedOrder,
}

/// Public gateway configuration for the browser popup flow.
#[derive(Debug, Serialize)]
pub struct PaymentConfigResponse {
    #[serde(rename = "keyId")]
    pub key_id: String,
}

/// Verify a gateway payment signature and mark the order paid.
///
/// `POST /api/payment/verify`
///
/// 400 on signature mismatch, with no state change.
#[instrument(skip(state, auth, body))]
pub async fn verify(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(body): Json<VerifyPaymentRequest>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    let order = CheckoutService::new(state.pool(), state.razorpay())
        .verify_payment(
            user.id,
            &body.razorpay_order_id,
            &body.razorpay_payment_id,
            &body.razorpay_signature,
            body.internal_order_id,
        )
        .await?;

    Ok(Json(VerifyPaymentResponse {
        success: true,
        order,
    }))
}

/// The public gateway key id.
///
/// `GET /api/payment/config`
#[instrument(skip(state))]
pub async fn config(State(state): State<AppState>) -> impl IntoResponse {
    Json(PaymentConfigResponse {
        key_id: state.razorpay().key_id().to_owned(),
    })
}
