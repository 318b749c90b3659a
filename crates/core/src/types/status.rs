//! Order lifecycle status and payment method enums.

use serde::{Deserialize, Serialize};

/// Ordered fulfillment steps shown on the order tracking page.
///
/// `Fulfilled` shares the shipped slot; `Cancelled` has no slot.
pub const PROGRESS_STEPS: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Paid,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
];

/// Order lifecycle status.
///
/// Orders move `pending -> paid -> processing -> shipped/fulfilled ->
/// delivered`. `cancelled` is terminal and reachable only from the first
/// three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Processing,
    Shipped,
    Fulfilled,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether a customer may still cancel an order in this status.
    #[must_use]
    pub const fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Paid | Self::Processing)
    }

    /// Whether this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Position of this status within [`PROGRESS_STEPS`].
    ///
    /// Returns `None` for cancelled orders, which display no progress bar.
    #[must_use]
    pub const fn progress_index(&self) -> Option<usize> {
        match self {
            Self::Pending => Some(0),
            Self::Paid => Some(1),
            Self::Processing => Some(2),
            Self::Shipped | Self::Fulfilled => Some(3),
            Self::Delivered => Some(4),
            Self::Cancelled => None,
        }
    }

    /// The wire/database representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Fulfilled => "fulfilled",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "fulfilled" => Ok(Self::Fulfilled),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Online payment through the Razorpay popup flow.
    #[default]
    Razorpay,
    /// Cash on delivery; no gateway involvement.
    Cod,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Razorpay => f.write_str("razorpay"),
            Self::Cod => f.write_str("cod"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cancellable_statuses() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Paid.is_cancellable());
        assert!(OrderStatus::Processing.is_cancellable());

        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Fulfilled.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_progress_index() {
        assert_eq!(OrderStatus::Pending.progress_index(), Some(0));
        assert_eq!(OrderStatus::Paid.progress_index(), Some(1));
        assert_eq!(OrderStatus::Processing.progress_index(), Some(2));
        assert_eq!(OrderStatus::Shipped.progress_index(), Some(3));
        assert_eq!(OrderStatus::Fulfilled.progress_index(), Some(3));
        assert_eq!(OrderStatus::Delivered.progress_index(), Some(4));
        assert_eq!(OrderStatus::Cancelled.progress_index(), None);
    }

    #[test]
    fn test_progress_steps_agree_with_index() {
        for (index, step) in PROGRESS_STEPS.iter().enumerate() {
            assert_eq!(step.progress_index(), Some(index));
        }
    }

    #[test]
    fn test_roundtrip_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Fulfilled,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Ok(status));
        }
        assert!(OrderStatus::from_str("refunded").is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).expect("serialize"),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"cod\"").expect("deserialize"),
            PaymentMethod::Cod
        );
    }
}
