//! Cart route handlers.
//!
//! All handlers require authentication; every repository call is scoped to
//! the session user, so cross-user access is structurally impossible.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printforge_core::CartItemId;

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{CartItem, NewCartItem};
use crate::state::AppState;

/// Cart listing response.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
}

/// Single-item response.
#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub item: CartItem,
}

/// Quantity update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// Mutation acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// List the user's cart, newest first.
///
/// `GET /api/cart`
#[instrument(skip(state, auth))]
pub async fn list(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    let items = CartRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(CartResponse { items }))
}

/// Add an item to the cart.
///
/// `POST /api/cart`
///
/// Quantity defaults to 1; the design descriptor, if present, is persisted
/// verbatim with the line.
#[instrument(skip(state, auth, item))]
pub async fn add(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(item): Json<NewCartItem>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    if item.product_name.trim().is_empty() || item.variant_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Product and variant names are required".to_owned(),
        ));
    }
    if let Some(position) = &item.design_config
        && !position.is_valid()
    {
        return Err(AppError::BadRequest(
            "Design position out of bounds".to_owned(),
        ));
    }

    let created = CartRepository::new(state.pool()).add(user.id, &item).await?;
    Ok(Json(CartItemResponse { item: created }))
}

/// Update the quantity of a cart line.
///
/// `PATCH /api/cart/{id}`
///
/// Quantities below 1 are rejected; remove the line instead.
#[instrument(skip(state, auth))]
pub async fn update_quantity(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    if body.quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_owned(),
        ));
    }

    let item = CartRepository::new(state.pool())
        .update_quantity(user.id, CartItemId::new(id), body.quantity)
        .await?;
    Ok(Json(CartItemResponse { item }))
}

/// Remove a cart line.
///
/// `DELETE /api/cart/{id}`
#[instrument(skip(state, auth))]
pub async fn remove(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    CartRepository::new(state.pool())
        .remove(user.id, CartItemId::new(id))
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Remove every line in the user's cart.
///
/// `DELETE /api/cart`
#[instrument(skip(state, auth))]
pub async fn clear(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    let removed = CartRepository::new(state.pool()).clear(user.id).await?;
    tracing::debug!(count = removed, "Cart cleared");
    Ok(Json(SuccessResponse { success: true }))
}
