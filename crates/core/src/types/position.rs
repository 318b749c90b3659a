//! Design-position descriptor.
//!
//! The descriptor is the only state the mockup editor persists: a signed
//! percentage offset for each axis plus a percentage scale, all relative to
//! the product type's placement rectangle. It travels with the cart item
//! (`design_config`) and is snapshotted onto the order item at checkout.

use serde::{Deserialize, Serialize};

/// Lower bound for each axis offset, in percent.
pub const MIN_OFFSET_PCT: f64 = -50.0;
/// Upper bound for each axis offset, in percent.
pub const MAX_OFFSET_PCT: f64 = 50.0;
/// Smallest permitted design scale, in percent.
pub const MIN_SCALE_PCT: u16 = 50;
/// Largest permitted design scale, in percent.
pub const MAX_SCALE_PCT: u16 = 150;

/// Where and how large a design renders within its placement rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignPosition {
    /// Horizontal offset in percent of the placement rectangle, in [-50, 50].
    pub x: f64,
    /// Vertical offset in percent of the placement rectangle, in [-50, 50].
    pub y: f64,
    /// Scale in percent, in [50, 150].
    pub scale: u16,
}

impl Default for DesignPosition {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 100,
        }
    }
}

impl DesignPosition {
    /// Build a descriptor, clamping every field into its domain.
    #[must_use]
    pub fn clamped(x: f64, y: f64, scale: u16) -> Self {
        Self {
            x: clamp_offset(x),
            y: clamp_offset(y),
            scale: scale.clamp(MIN_SCALE_PCT, MAX_SCALE_PCT),
        }
    }

    /// Whether every field already lies within its domain.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (MIN_OFFSET_PCT..=MAX_OFFSET_PCT).contains(&self.x)
            && (MIN_OFFSET_PCT..=MAX_OFFSET_PCT).contains(&self.y)
            && (MIN_SCALE_PCT..=MAX_SCALE_PCT).contains(&self.scale)
    }
}

/// Clamp an axis offset to [-50, 50]. NaN collapses to 0.
#[must_use]
pub fn clamp_offset(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(MIN_OFFSET_PCT, MAX_OFFSET_PCT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_centered_full_scale() {
        let pos = DesignPosition::default();
        assert_eq!(pos, DesignPosition { x: 0.0, y: 0.0, scale: 100 });
        assert!(pos.is_valid());
    }

    #[test]
    fn test_clamped_bounds_each_field() {
        let pos = DesignPosition::clamped(-120.0, 75.5, 500);
        assert_eq!(pos.x, -50.0);
        assert_eq!(pos.y, 50.0);
        assert_eq!(pos.scale, 150);

        let pos = DesignPosition::clamped(12.25, -3.5, 10);
        assert_eq!(pos.x, 12.25);
        assert_eq!(pos.y, -3.5);
        assert_eq!(pos.scale, 50);
    }

    #[test]
    fn test_nan_offset_collapses_to_zero() {
        assert_eq!(clamp_offset(f64::NAN), 0.0);
    }

    #[test]
    fn test_json_shape() {
        let pos = DesignPosition { x: -12.5, y: 3.0, scale: 110 };
        let json = serde_json::to_value(pos).expect("serialize");
        assert_eq!(json["x"], -12.5);
        assert_eq!(json["y"], 3.0);
        assert_eq!(json["scale"], 110);
    }
}
