//! Mockup compositor.
//!
//! Positions an uploaded design over a product photo and emits the
//! normalized [`DesignPosition`](printforge_core::DesignPosition) descriptor
//! persisted with the cart item. The whole module is pure: no network I/O,
//! no shared state.

mod editor;
mod placement;

pub use editor::{ContainerBounds, MockupEditor};
pub use placement::{placement_for, placement_for_label, PlacementRect};

use serde::Serialize;

/// Product colors light enough that the design composites with a
/// multiply-style blend. Everything else uses a screen-style blend.
pub const LIGHT_COLORS: &[&str] = &[
    "White",
    "Heather Grey",
    "Sport Grey",
    "Khaki",
    "Desert Dust",
];

/// CSS blend mode for compositing the design layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Multiply,
    Screen,
}

impl BlendMode {
    /// The CSS `mix-blend-mode` value.
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Screen => "screen",
        }
    }
}

/// Blend mode plus layer opacity for the design overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendStyle {
    pub mode: BlendMode,
    pub opacity: f64,
}

/// Pick the compositing style for a product color.
///
/// Presentation rule, reproduced for visual parity: light garments multiply
/// at 90% opacity, dark ones screen at 85%.
#[must_use]
pub fn blend_for_color(color: &str) -> BlendStyle {
    if LIGHT_COLORS.contains(&color) {
        BlendStyle {
            mode: BlendMode::Multiply,
            opacity: 0.9,
        }
    } else {
        BlendStyle {
            mode: BlendMode::Screen,
            opacity: 0.85,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_colors_multiply() {
        for color in LIGHT_COLORS {
            let style = blend_for_color(color);
            assert_eq!(style.mode, BlendMode::Multiply);
            assert_eq!(style.opacity, 0.9);
        }
    }

    #[test]
    fn test_dark_colors_screen() {
        for color in ["Black", "Navy", "Maroon", "Forest Green", "Charcoal/White"] {
            let style = blend_for_color(color);
            assert_eq!(style.mode, BlendMode::Screen);
            assert_eq!(style.opacity, 0.85);
        }
    }

    #[test]
    fn test_css_names() {
        assert_eq!(BlendMode::Multiply.as_css(), "multiply");
        assert_eq!(BlendMode::Screen.as_css(), "screen");
    }
}
