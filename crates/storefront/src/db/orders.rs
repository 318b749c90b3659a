//! Order repository.
//!
//! Order creation inserts the order row and every line-item snapshot in a
//! single transaction: an order can never be observed without its items.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use std::str::FromStr;

use printforge_core::{
    CurrencyCode, DesignPosition, OrderId, OrderItemId, OrderStatus, Price, ProductId, UserId,
    VariantId,
};

use super::RepositoryError;
use crate::models::{Address, NewOrder, NewOrderItem, Order, OrderItem};

/// Database row for an order.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    user_id: UserId,
    order_number: String,
    status: String,
    subtotal: Price,
    shipping_cost: Price,
    tax: Price,
    total_amount: Price,
    currency: String,
    razorpay_order_id: Option<String>,
    razorpay_payment_id: Option<String>,
    shipping_address: Json<Address>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_str(&row.status).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;
        let currency = CurrencyCode::from_str(&row.currency).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid currency in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            order_number: row.order_number,
            status,
            subtotal: row.subtotal,
            shipping_cost: row.shipping_cost,
            tax: row.tax,
            total_amount: row.total_amount,
            currency,
            razorpay_order_id: row.razorpay_order_id,
            razorpay_payment_id: row.razorpay_payment_id,
            shipping_address: row.shipping_address.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Database row for an order item.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: OrderItemId,
    order_id: OrderId,
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
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
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
        }
    }
}

const ORDER_COLUMNS: &str = "id, user_id, order_number, status, subtotal, shipping_cost, tax, \
     total_amount, currency, razorpay_order_id, razorpay_payment_id, shipping_address, \
     created_at, updated_at";

const ITEM_COLUMNS: &str = "id, order_id, product_id, variant_id, product_name, variant_name, \
     color, size, design_url, mockup_url, quantity, unit_price, design_config";

/// Minimal order facts for the cancellation gate.
#[derive(Debug, Clone, Copy)]
pub struct OrderHead {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an order in status `pending` together with its line-item
    /// snapshots, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on an order-number collision and
    /// `RepositoryError::Database` for other failures. Either way, nothing
    /// is persisted.
    pub async fn create_with_items(
        &self,
        user_id: UserId,
        order: &NewOrder,
        items: &[NewOrderItem],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row: OrderRow = sqlx::query_as(&format!(
            "INSERT INTO orders \
                 (user_id, order_number, status, subtotal, shipping_cost, tax, \
                  total_amount, currency, shipping_address) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&order.order_number)
        .bind(OrderStatus::Pending.as_str())
        .bind(order.subtotal)
        .bind(order.shipping_cost)
        .bind(order.tax)
        .bind(order.total_amount)
        .bind(order.currency.code())
        .bind(Json(&order.shipping_address))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("order number already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        for item in items {
            sqlx::query(
                "INSERT INTO order_items \
                     (order_id, product_id, variant_id, product_name, variant_name, \
                      color, size, design_url, mockup_url, quantity, unit_price, design_config) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
            )
            .bind(row.id)
            .bind(item.product_id)
            .bind(item.variant_id)
            .bind(&item.product_name)
            .bind(&item.variant_name)
            .bind(&item.color)
            .bind(&item.size)
            .bind(&item.design_url)
            .bind(&item.mockup_url)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.design_config.map(Json))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        row.try_into()
    }

    /// Record the gateway-side order id after the remote order is created.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist.
    pub async fn set_gateway_order_id(
        &self,
        order_id: OrderId,
        gateway_order_id: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE orders SET razorpay_order_id = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(gateway_order_id)
        .bind(order_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Transition an order to `paid`, recording the gateway payment id.
    ///
    /// The update is filtered by owner as well as order id, so a verified
    /// signature for one account cannot flip another account's order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order matches both ids.
    pub async fn mark_paid(
        &self,
        user_id: UserId,
        order_id: OrderId,
        payment_id: &str,
    ) -> Result<Order, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "UPDATE orders \
             SET status = $1, razorpay_payment_id = $2, updated_at = NOW() \
             WHERE id = $3 AND user_id = $4 \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(OrderStatus::Paid.as_str())
        .bind(payment_id)
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }

    /// Look up owner and status for the cancellation gate, regardless of
    /// who owns the order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn head(&self, order_id: OrderId) -> Result<Option<OrderHead>, RepositoryError> {
        let row: Option<(OrderId, UserId, String)> =
            sqlx::query_as("SELECT id, user_id, status FROM orders WHERE id = $1")
                .bind(order_id)
                .fetch_optional(self.pool)
                .await?;

        row.map(|(id, user_id, status)| {
            let status = OrderStatus::from_str(&status).map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
            })?;
            Ok(OrderHead {
                id,
                user_id,
                status,
            })
        })
        .transpose()
    }

    /// Set an order's status to `cancelled`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist.
    pub async fn cancel(&self, order_id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $1, updated_at = NOW() WHERE id = $2")
            .bind(OrderStatus::Cancelled.as_str())
            .bind(order_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Get one of the user's orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        user_id: UserId,
        order_id: OrderId,
    ) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
        ))
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    /// Line items for an order, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows: Vec<OrderItemRow> = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id ASC"
        ))
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }
}
