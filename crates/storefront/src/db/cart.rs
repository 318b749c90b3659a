//! Cart repository.
//!
//! Every mutation is scoped by both the item id and the owning user id, so
//! one user can never touch another user's cart.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use printforge_core::{CartItemId, DesignPosition, Price, ProductId, UserId, VariantId};

use super::RepositoryError;
use crate::models::{CartItem, NewCartItem};

/// Database row for a cart item.
#[derive(Debug, sqlx::FromRow)]
struct CartItemRow {
    id: CartItemId,
    user_id: UserId,
    product_id: ProductId,
    variant_id: VariantId,
    product_name: String,
    variant_name: String,
    color: Option<String>,
    size: Option<String>,
    design_url: Option<String>,
    mockup_url: Option<String>,
    quantity: i32,
    unit_price: Price,
    design_config: Option<Json<DesignPosition>>,
    created_at: DateTime<Utc>,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            variant_id: row.variant_id,
            product_name: row.product_name,
            variant_name: row.variant_name,
            color: row.color,
            size: row.size,
            design_url: row.design_url,
            mockup_url: row.mockup_url,
            quantity: row.quantity,
            unit_price: row.unit_price,
            design_config: row.design_config.map(|Json(position)| position),
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, user_id, product_id, variant_id, product_name, variant_name, \
     color, size, design_url, mockup_url, quantity, unit_price, design_config, created_at";

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's cart items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let rows: Vec<CartItemRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM cart_items WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CartItem::from).collect())
    }

    /// Add an item to a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(
        &self,
        user_id: UserId,
        item: &NewCartItem,
    ) -> Result<CartItem, RepositoryError> {
        let row: CartItemRow = sqlx::query_as(&format!(
            "INSERT INTO cart_items \
                 (user_id, product_id, variant_id, product_name, variant_name, \
                  color, size, design_url, mockup_url, quantity, unit_price, design_config) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(user_id)
        .bind(item.product_id)
        .bind(item.variant_id)
        .bind(&item.product_name)
        .bind(&item.variant_name)
        .bind(&item.color)
        .bind(&item.size)
        .bind(&item.design_url)
        .bind(&item.mockup_url)
        .bind(item.quantity_or_default())
        .bind(item.unit_price)
        .bind(item.design_config.map(Json))
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update the quantity of one of the user's cart items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist or
    /// belongs to another user.
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let row: Option<CartItemRow> = sqlx::query_as(&format!(
            "UPDATE cart_items SET quantity = $1 \
             WHERE id = $2 AND user_id = $3 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(quantity)
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(CartItem::from).ok_or(RepositoryError::NotFound)
    }

    /// Remove one of the user's cart items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist or
    /// belongs to another user.
    pub async fn remove(
        &self,
        user_id: UserId,
        item_id: CartItemId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
            .bind(item_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Remove every item in a user's cart. Clearing an empty cart is fine.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn clear(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
