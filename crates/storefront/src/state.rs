//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::services::razorpay::{RazorpayClient, RazorpayError};
use crate::services::storage::DesignStorage;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the database pool, the payment gateway client, and design
/// storage. There are no ambient globals; everything a handler needs comes
/// through here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    razorpay: RazorpayClient,
    storage: DesignStorage,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment gateway client cannot be built.
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Result<Self, RazorpayError> {
        let razorpay = RazorpayClient::new(&config.razorpay)?;
        let storage = DesignStorage::new(config.upload_dir.clone(), &config.base_url);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                razorpay,
                storage,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the payment gateway client.
    #[must_use]
    pub fn razorpay(&self) -> &RazorpayClient {
        &self.inner.razorpay
    }

    /// Get a reference to the design storage.
    #[must_use]
    pub fn storage(&self) -> &DesignStorage {
        &self.inner.storage
    }
}
