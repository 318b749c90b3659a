//! Address book route handlers.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::instrument;

use printforge_core::AddressId;

use crate::db::AddressRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Address, NewAddress};
use crate::state::AppState;

/// Address listing response.
#[derive(Debug, Serialize)]
pub struct AddressesResponse {
    pub addresses: Vec<Address>,
}

/// Single-address response.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub address: Address,
}

/// Mutation acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// List the user's addresses, default first.
///
/// `GET /api/addresses`
#[instrument(skip(state, auth))]
pub async fn list(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    let addresses = AddressRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(AddressesResponse { addresses }))
}

/// Create an address.
///
/// `POST /api/addresses`
///
/// When the new address is marked default, the user's previous default is
/// unset in the same transaction.
#[instrument(skip(state, auth, address))]
pub async fn create(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(address): Json<NewAddress>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    let missing = address.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let created = AddressRepository::new(state.pool())
        .create(user.id, &address)
        .await?;
    Ok(Json(AddressResponse { address: created }))
}

/// Update an address in place.
///
/// `PUT /api/addresses/{id}`
#[instrument(skip(state, auth, address))]
pub async fn update(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i32>,
    Json(address): Json<NewAddress>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;

    let missing = address.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let updated = AddressRepository::new(state.pool())
        .update(user.id, AddressId::new(id), &address)
        .await?;
    Ok(Json(AddressResponse { address: updated }))
}

/// Make an address the default, atomically unsetting the rest.
///
/// `PUT /api/addresses/{id}/default`
#[instrument(skip(state, auth))]
pub async fn make_default(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    let address = AddressRepository::new(state.pool())
        .set_default(user.id, AddressId::new(id))
        .await?;
    Ok(Json(AddressResponse { address }))
}

/// Delete an address.
///
/// `DELETE /api/addresses/{id}`
#[instrument(skip(state, auth))]
pub async fn remove(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let RequireAuth(user) = auth;
    AddressRepository::new(state.pool())
        .delete(user.id, AddressId::new(id))
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}
