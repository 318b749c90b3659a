//! Checkout orchestration.
//!
//! Owns the money math and the order/payment workflow: pricing the cart,
//! creating the internal order plus its gateway twin, verifying payment
//! callbacks, and gating cancellation. Pricing is always recomputed from
//! the authoritative cart; client-submitted totals are never trusted.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use serde::Serialize;
use sqlx::PgPool;

use printforge_core::{AddressId, CurrencyCode, OrderId, OrderStatus, PaymentMethod, Price, UserId};

use crate::db::{AddressRepository, CartRepository, OrderRepository, RepositoryError};
use crate::error::AppError;
use crate::models::{Address, CartItem, NewAddress, NewOrder, NewOrderItem};
use crate::services::razorpay::RazorpayClient;

/// Flat shipping charge for any non-empty cart, in minor currency units.
pub const FLAT_SHIPPING: Price = Price::new(99);

/// GST rate applied to the subtotal, in percent.
pub const GST_RATE_PCT: u32 = 18;

/// Server-side pricing for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl PricingBreakdown {
    /// Price a set of cart items.
    ///
    /// `subtotal = sum(unit_price * qty)`, shipping is flat for a non-empty
    /// cart and zero otherwise, `tax = round(subtotal * 18%)`.
    #[must_use]
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal: Price = items.iter().map(CartItem::line_total).sum();
        let shipping = if items.is_empty() {
            Price::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = subtotal.percent(GST_RATE_PCT);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Generate a human-readable order number: `POD-<millis>-<6 chars>`.
#[must_use]
pub fn generate_order_number() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();
    format!("POD-{}-{suffix}", Utc::now().timestamp_millis())
}

/// The shipping address for an order: an existing address-book entry or a
/// freshly entered one (which is saved to the address book first).
#[derive(Debug, Clone)]
pub enum ShippingChoice {
    Existing(AddressId),
    New(NewAddress),
}

/// Result of placing an order.
///
/// Serialized with the field names the browser checkout flow expects.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    #[serde(rename = "internalOrderId")]
    pub internal_order_id: OrderId,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    /// Gateway order id; absent for cash-on-delivery.
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    pub gateway_order_id: Option<String>,
    /// Amount in gateway subunits (paise).
    pub amount: i64,
    pub currency: String,
}

/// Result of a successful payment verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedOrder {
    pub id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
}

/// Checkout workflow service.
pub struct CheckoutService<'a> {
    pool: &'a PgPool,
    razorpay: &'a RazorpayClient,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, razorpay: &'a RazorpayClient) -> Self {
        Self { pool, razorpay }
    }

    /// Place an order from the user's cart.
    ///
    /// Creates the order and its line-item snapshots atomically, then either
    /// finishes immediately (cash-on-delivery, cart cleared) or creates the
    /// matching gateway order (online payment, cart cleared only after
    /// verification).
    ///
    /// # Errors
    ///
    /// - `BadRequest` for an empty cart or unusable shipping address
    /// - `Gateway` when the gateway order cannot be created; the internal
    ///   order stays `pending` without a gateway id
    pub async fn place_order(
        &self,
        user_id: UserId,
        payment_method: PaymentMethod,
        currency: CurrencyCode,
        shipping: ShippingChoice,
    ) -> Result<OrderReceipt, AppError> {
        let shipping_address = self.resolve_shipping(user_id, shipping).await?;

        let cart = CartRepository::new(self.pool).list(user_id).await?;
        if cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_owned()));
        }

        let pricing = PricingBreakdown::for_items(&cart);
        let order_number = generate_order_number();
        let items: Vec<NewOrderItem> = cart.iter().map(NewOrderItem::from).collect();

        let orders = OrderRepository::new(self.pool);
        let order = orders
            .create_with_items(
                user_id,
                &NewOrder {
                    order_number: order_number.clone(),
                    subtotal: pricing.subtotal,
                    shipping_cost: pricing.shipping,
                    tax: pricing.tax,
                    total_amount: pricing.total,
                    currency,
                    shipping_address,
                },
                &items,
            )
            .await?;

        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            total = %pricing.total,
            method = %payment_method,
            "Order created"
        );

        match payment_method {
            PaymentMethod::Cod => {
                // The order exists; a failed clear leaves stale cart rows,
                // not a broken order.
                if let Err(e) = CartRepository::new(self.pool).clear(user_id).await {
                    tracing::warn!(order_id = %order.id, "Failed to clear cart after COD order: {e}");
                }

                Ok(OrderReceipt {
                    internal_order_id: order.id,
                    order_number,
                    gateway_order_id: None,
                    amount: pricing.total.subunits(),
                    currency: currency.code().to_owned(),
                })
            }
            PaymentMethod::Razorpay => {
                let gateway_order = self
                    .razorpay
                    .create_order(
                        pricing.total.subunits(),
                        currency.code(),
                        &order_number,
                        serde_json::json!({
                            "internal_order_id": order.id,
                            "user_id": user_id,
                        }),
                    )
                    .await?;

                orders
                    .set_gateway_order_id(order.id, &gateway_order.id)
                    .await?;

                Ok(OrderReceipt {
                    internal_order_id: order.id,
                    order_number,
                    gateway_order_id: Some(gateway_order.id),
                    amount: gateway_order.amount,
                    currency: gateway_order.currency,
                })
            }
        }
    }

    /// Verify a gateway payment callback and mark the order paid.
    ///
    /// # Errors
    ///
    /// - `BadRequest` on signature mismatch; the order is not touched
    /// - `NotFound` when no order matches both the order id and the caller
    pub async fn verify_payment(
        &self,
        user_id: UserId,
        gateway_order_id: &str,
        payment_id: &str,
        signature: &str,
        internal_order_id: OrderId,
    ) -> Result<VerifiedOrder, AppError> {
        if !self
            .razorpay
            .verify_signature(gateway_order_id, payment_id, signature)
        {
            tracing::warn!(
                order_id = %internal_order_id,
                "Rejected payment callback with invalid signature"
            );
            return Err(AppError::BadRequest(
                "Invalid payment signature".to_owned(),
            ));
        }

        let order = OrderRepository::new(self.pool)
            .mark_paid(user_id, internal_order_id, payment_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AppError::NotFound("Order not found".to_owned()),
                other => other.into(),
            })?;

        if let Err(e) = CartRepository::new(self.pool).clear(user_id).await {
            tracing::warn!(order_id = %order.id, "Failed to clear cart after payment: {e}");
        }

        tracing::info!(order_id = %order.id, "Payment verified");

        Ok(VerifiedOrder {
            id: order.id,
            order_number: order.order_number,
            status: order.status,
        })
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the order does not exist
    /// - `Forbidden` when it belongs to another user
    /// - `BadRequest` (naming the current status) when it is past the
    ///   cancellable window
    pub async fn cancel_order(&self, user_id: UserId, order_id: OrderId) -> Result<(), AppError> {
        let orders = OrderRepository::new(self.pool);

        let head = orders
            .head(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_owned()))?;

        if head.user_id != user_id {
            return Err(AppError::Forbidden(
                "Order belongs to another account".to_owned(),
            ));
        }

        if !head.status.is_cancellable() {
            return Err(AppError::BadRequest(format!(
                "Cannot cancel order with status: {}",
                head.status
            )));
        }

        orders.cancel(order_id).await?;
        tracing::info!(order_id = %order_id, "Order cancelled");
        Ok(())
    }

    /// Resolve the shipping choice into a concrete address, saving newly
    /// entered addresses to the address book.
    async fn resolve_shipping(
        &self,
        user_id: UserId,
        shipping: ShippingChoice,
    ) -> Result<Address, AppError> {
        let addresses = AddressRepository::new(self.pool);
        match shipping {
            ShippingChoice::Existing(id) => addresses
                .get(user_id, id)
                .await?
                .ok_or_else(|| AppError::BadRequest("Unknown shipping address".to_owned())),
            ShippingChoice::New(new_address) => {
                let missing = new_address.missing_fields();
                if !missing.is_empty() {
                    return Err(AppError::BadRequest(format!(
                        "Missing required address fields: {}",
                        missing.join(", ")
                    )));
                }
                Ok(addresses.create(user_id, &new_address).await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use printforge_core::{CartItemId, ProductId, VariantId};

    fn item(unit_price: i64, quantity: i32) -> CartItem {
        CartItem {
            id: CartItemId::new(1),
            user_id: UserId::new(1),
            product_id: ProductId::new(71),
            variant_id: VariantId::new(71_000),
            product_name: "Tee".to_owned(),
            variant_name: "White / M".to_owned(),
            color: Some("White".to_owned()),
            size: Some("M".to_owned()),
            design_url: None,
            mockup_url: None,
            quantity,
            unit_price: Price::new(unit_price),
            design_config: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_pricing_round_subtotal() {
        // S=1000: tax = 180, total = 1000 + 99 + 180
        let pricing = PricingBreakdown::for_items(&[item(1000, 1)]);
        assert_eq!(pricing.subtotal, Price::new(1000));
        assert_eq!(pricing.shipping, Price::new(99));
        assert_eq!(pricing.tax, Price::new(180));
        assert_eq!(pricing.total, Price::new(1279));
    }

    #[test]
    fn test_pricing_mixed_cart() {
        // 2 x 799 + 1 x 599 = 2197; tax = round(395.46) = 395; total = 2691
        let pricing = PricingBreakdown::for_items(&[item(799, 2), item(599, 1)]);
        assert_eq!(pricing.subtotal, Price::new(2197));
        assert_eq!(pricing.tax, Price::new(395));
        assert_eq!(pricing.total, Price::new(2691));
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let pricing = PricingBreakdown::for_items(&[]);
        assert_eq!(pricing.subtotal, Price::ZERO);
        assert_eq!(pricing.shipping, Price::ZERO);
        assert_eq!(pricing.tax, Price::ZERO);
        assert_eq!(pricing.total, Price::ZERO);
    }

    #[test]
    fn test_zero_priced_items_still_pay_shipping() {
        let pricing = PricingBreakdown::for_items(&[item(0, 2)]);
        assert_eq!(pricing.subtotal, Price::ZERO);
        assert_eq!(pricing.shipping, Price::new(99));
        assert_eq!(pricing.total, Price::new(99));
    }

    #[test]
    fn test_order_number_shape() {
        let number = generate_order_number();
        let mut parts = number.splitn(3, '-');
        assert_eq!(parts.next(), Some("POD"));

        let millis: i64 = parts
            .next()
            .expect("timestamp part")
            .parse()
            .expect("timestamp is numeric");
        assert!(millis > 0);

        let suffix = parts.next().expect("suffix part");
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_order_numbers_are_unique() {
        let a = generate_order_number();
        let b = generate_order_number();
        assert_ne!(a, b);
    }
}
