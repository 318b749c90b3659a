//! Session-related types.
//!
//! Types stored in the session for authentication state. The auth
//! collaborator establishes the session; the storefront only reads the
//! identity back out and clears it on sign-out.

use serde::{Deserialize, Serialize};

use printforge_core::{Email, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
