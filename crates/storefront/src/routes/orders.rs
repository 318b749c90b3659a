//! Order route handlers.
//!
//! Placement and cancellation delegate to the checkout service; the
//! handlers only translate wire shapes.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

use printforge_core::{AddressId, CurrencyCode, OrderId, PaymentMethod};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{NewAddress, Order, OrderWithItems};
use crate::services::checkout::{CheckoutService, ShippingChoice};
use crate::state::AppState;

/// Order placement request.
///
/// The client's `amount` is deliberately absent: pricing is recomputed
/// server-side from the cart. The shipping address is either an existing
/// address-book id or a full new address.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub shipping_address_id: Option<AddressId>,
    pub shipping_address: Option<NewAddress>,
}

/// Cancellation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub order_id: OrderId,
}

/// Order history response.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Mutation acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Place an order from the current cart.
///
/// `POST /api/orders/create`
#[instrument(skip(state, auth, body))]
pub async fn create(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    let currency = match body.currency.as_deref() {
        None | Some("") => CurrencyCode::default(),
        Some(code) => CurrencyCode::from_str(code).map_err(AppError::BadRequest)?,
    };

    let shipping = match (body.shipping_address_id, body.shipping_address) {
        (Some(id), _) => ShippingChoice::Existing(id),
        (None, Some(address)) => ShippingChoice::New(address),
        (None, None) => {
            return Err(AppError::BadRequest(
                "Shipping address is required".to_owned(),
            ));
        }
    };

    let receipt = CheckoutService::new(state.pool(), state.razorpay())
        .place_order(user.id, body.payment_method, currency, shipping)
        .await?;

    Ok(Json(receipt))
}

/// Cancel an order.
///
/// `POST /api/orders/cancel`
///
/// 404 for unknown orders, 403 for someone else's order, 400 (naming the
/// current status) once the order is past the cancellable window.
#[instrument(skip(state, auth))]
pub async fn cancel(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(body): Json<CancelOrderRequest>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    CheckoutService::new(state.pool(), state.razorpay())
        .cancel_order(user.id, body.order_id)
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// The user's order history, newest first.
///
/// `GET /api/orders`
#[instrument(skip(state, auth))]
pub async fn list(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    let orders = OrderRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(OrdersResponse { orders }))
}

/// One order with its line items.
///
/// `GET /api/orders/{id}`
#[instrument(skip(state, auth))]
pub async fn show(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    let repo = OrderRepository::new(state.pool());

    let order = repo
        .get(user.id, OrderId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_owned()))?;
    let items = repo.items(order.id).await?;

    Ok(Json(OrderWithItems { order, items }))
}
