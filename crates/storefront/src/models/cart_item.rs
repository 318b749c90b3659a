//! Cart line item domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use printforge_core::{CartItemId, DesignPosition, Price, ProductId, UserId, VariantId};

/// A line item in a user's cart.
///
/// Product and variant names are denormalized at add time so the cart keeps
/// rendering even if the catalog changes. The design descriptor travels with
/// the item and is snapshotted onto the order at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub product_name: String,
    pub variant_name: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub design_url: Option<String>,
    pub mockup_url: Option<String>,
    pub quantity: i32,
    /// Unit price in minor currency units.
    pub unit_price: Price,
    pub design_config: Option<DesignPosition>,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    /// Price of the whole line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * i64::from(self.quantity)
    }
}

/// Fields for adding an item to the cart.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub product_name: String,
    pub variant_name: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub design_url: Option<String>,
    pub mockup_url: Option<String>,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i32>,
    pub unit_price: Price,
    pub design_config: Option<DesignPosition>,
}

impl NewCartItem {
    /// The effective quantity (missing or non-positive input becomes 1).
    #[must_use]
    pub fn quantity_or_default(&self) -> i32 {
        self.quantity.filter(|q| *q >= 1).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem {
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
            quantity: 3,
            unit_price: Price::new(799),
            design_config: None,
            created_at: Utc::now(),
        };
        assert_eq!(item.line_total(), Price::new(2397));
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let mut item = NewCartItem {
            product_id: ProductId::new(71),
            variant_id: VariantId::new(71_000),
            product_name: "Tee".to_owned(),
            variant_name: "White / M".to_owned(),
            color: None,
            size: None,
            design_url: None,
            mockup_url: None,
            quantity: None,
            unit_price: Price::new(799),
            design_config: None,
        };
        assert_eq!(item.quantity_or_default(), 1);

        item.quantity = Some(0);
        assert_eq!(item.quantity_or_default(), 1);

        item.quantity = Some(4);
        assert_eq!(item.quantity_or_default(), 4);
    }
}
