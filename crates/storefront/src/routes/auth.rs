//! Auth boundary route handlers.
//!
//! Sign-in lives with the auth collaborator; the storefront only exposes
//! sign-out, which flushes the whole session (cart id, identity, all of it).

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;

/// Sign-out acknowledgement.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Clear the session.
///
/// `POST /api/auth/logout`
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }
    Ok(Json(LogoutResponse { success: true }))
}
