//! Order domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use printforge_core::{
    CurrencyCode, DesignPosition, OrderId, OrderItemId, OrderStatus, Price, ProductId, UserId,
    VariantId,
};

use super::{Address, CartItem};

/// A placed order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Human-readable order number, `POD-<millis>-<6 uppercase chars>`.
    pub order_number: String,
    pub status: OrderStatus,
    pub subtotal: Price,
    pub shipping_cost: Price,
    pub tax: Price,
    pub total_amount: Price,
    pub currency: CurrencyCode,
    /// Gateway-side order id, set once the gateway order is created.
    pub razorpay_order_id: Option<String>,
    /// Gateway-side payment id, set at payment verification.
    pub razorpay_payment_id: Option<String>,
    /// Denormalized snapshot of the shipping address at checkout time.
    pub shipping_address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Position in the tracking step list, `None` for cancelled orders.
    #[must_use]
    pub const fn progress_index(&self) -> Option<usize> {
        self.status.progress_index()
    }
}

/// An immutable order line, snapshotted from a cart item at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub product_name: String,
    pub variant_name: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub design_url: Option<String>,
    pub mockup_url: Option<String>,
    pub quantity: i32,
    pub unit_price: Price,
    pub design_config: Option<DesignPosition>,
}

/// An order with its line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Fields for creating an order row.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub subtotal: Price,
    pub shipping_cost: Price,
    pub tax: Price,
    pub total_amount: Price,
    pub currency: CurrencyCode,
    pub shipping_address: Address,
}

/// Fields for snapshotting one cart line into an order.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub product_name: String,
    pub variant_name: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub design_url: Option<String>,
    pub mockup_url: Option<String>,
    pub quantity: i32,
    pub unit_price: Price,
    pub design_config: Option<DesignPosition>,
}

impl From<&CartItem> for NewOrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            variant_id: item.variant_id,
            product_name: item.product_name.clone(),
            variant_name: item.variant_name.clone(),
            color: item.color.clone(),
            size: item.size.clone(),
            design_url: item.design_url.clone(),
            mockup_url: item.mockup_url.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            design_config: item.design_config,
        }
    }
}
