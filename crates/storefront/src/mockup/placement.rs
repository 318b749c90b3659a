//! Per-product-type design placement templates.

use serde::Serialize;

use crate::catalog::ProductKind;

/// The design's anchor rectangle, as percentages of the product image
/// bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// The placement template for a product kind.
///
/// Garments get a larger, higher rectangle than mugs or caps. Callers with
/// an unrecognized catalog label should resolve it to
/// [`ProductKind::TShirt`] before calling (see [`placement_for_label`]).
#[must_use]
pub const fn placement_for(kind: ProductKind) -> PlacementRect {
    match kind {
        ProductKind::TShirt => PlacementRect {
            top: 20.0,
            left: 25.0,
            width: 50.0,
            height: 40.0,
        },
        ProductKind::Hoodie => PlacementRect {
            top: 22.0,
            left: 28.0,
            width: 44.0,
            height: 35.0,
        },
        ProductKind::Mug => PlacementRect {
            top: 25.0,
            left: 20.0,
            width: 60.0,
            height: 50.0,
        },
        ProductKind::Hat => PlacementRect {
            top: 15.0,
            left: 25.0,
            width: 50.0,
            height: 40.0,
        },
    }
}

/// Template lookup from a raw catalog label, falling back to the t-shirt
/// rectangle for unrecognized labels.
#[must_use]
pub fn placement_for_label(label: &str) -> PlacementRect {
    placement_for(ProductKind::parse(label).unwrap_or(ProductKind::TShirt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_per_kind() {
        assert_eq!(placement_for(ProductKind::TShirt).top, 20.0);
        assert_eq!(placement_for(ProductKind::Hoodie).width, 44.0);
        assert_eq!(placement_for(ProductKind::Mug).height, 50.0);
        assert_eq!(placement_for(ProductKind::Hat).top, 15.0);
    }

    #[test]
    fn test_unknown_label_falls_back_to_tshirt() {
        assert_eq!(
            placement_for_label("POSTER"),
            placement_for(ProductKind::TShirt)
        );
        assert_eq!(
            placement_for_label("MUG"),
            placement_for(ProductKind::Mug)
        );
    }
}
