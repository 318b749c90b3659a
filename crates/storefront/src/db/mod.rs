//! Database operations for the storefront `PostgreSQL`.
//!
//! # Tables
//!
//! - `cart_items` - per-user cart lines with design descriptors
//! - `addresses` - user shipping addresses (one default per user)
//! - `orders` / `order_items` - placed orders and their snapshots
//! - `session` - tower-sessions storage (created by the session store)
//!
//! Queries use the sqlx runtime API with `FromRow` row structs so the crate
//! builds without a live database; migrations live in `migrations/` and are
//! applied at startup.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod addresses;
pub mod cart;
pub mod orders;

pub use addresses::AddressRepository;
pub use cart::CartRepository;
pub use orders::OrderRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate order number).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
