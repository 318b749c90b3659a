//! Interactive mockup editor state machine.
//!
//! Drives drag, scale, and reset of a design over a product photo. The
//! machine is synchronous and event-driven: pointer events (mouse and touch
//! are unified by the caller) mutate a single position+scale record, and
//! every mutation that changes the record yields the descriptor to persist.
//!
//! All offsets are percentages of the container's rendered bounding box, so
//! the descriptor is resolution-independent.

use printforge_core::{clamp_offset, DesignPosition, MAX_SCALE_PCT, MIN_SCALE_PCT};

use crate::catalog::ProductKind;

use super::placement::{placement_for, PlacementRect};

/// Rendered size of the mockup container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    /// Degenerate containers cannot normalize pointer deltas.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Drag baseline captured at pointer-down.
#[derive(Debug, Clone, Copy)]
struct DragStart {
    pointer_x: f64,
    pointer_y: f64,
    offset_x: f64,
    offset_y: f64,
}

/// The mockup editor.
///
/// Holds no server-side state and performs no I/O; the descriptor returned
/// from the event methods is the sole output.
#[derive(Debug)]
pub struct MockupEditor {
    kind: ProductKind,
    design_loaded: bool,
    scale: u16,
    offset_x: f64,
    offset_y: f64,
    drag: Option<DragStart>,
}

impl MockupEditor {
    /// Create an editor for a product kind, centered at full scale.
    #[must_use]
    pub const fn new(kind: ProductKind) -> Self {
        Self {
            kind,
            design_loaded: false,
            scale: 100,
            offset_x: 0.0,
            offset_y: 0.0,
            drag: None,
        }
    }

    /// Create an editor from a raw catalog label, falling back to the
    /// t-shirt template for unrecognized labels.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        Self::new(ProductKind::parse(label).unwrap_or(ProductKind::TShirt))
    }

    /// Mark whether a design image is loaded. Without one, drags are no-ops.
    pub fn set_design_loaded(&mut self, loaded: bool) {
        self.design_loaded = loaded;
        if !loaded {
            self.drag = None;
        }
    }

    /// The placement rectangle for this editor's product kind.
    #[must_use]
    pub const fn placement(&self) -> PlacementRect {
        placement_for(self.kind)
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The current descriptor.
    #[must_use]
    pub fn descriptor(&self) -> DesignPosition {
        DesignPosition {
            x: self.offset_x,
            y: self.offset_y,
            scale: self.scale,
        }
    }

    /// Pointer down: record the drag baseline and enter the dragging state.
    ///
    /// No-op when no design image is loaded.
    pub fn pointer_down(&mut self, pointer_x: f64, pointer_y: f64) {
        if !self.design_loaded {
            return;
        }
        self.drag = Some(DragStart {
            pointer_x,
            pointer_y,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
        });
    }

    /// Pointer move: update the offset from the drag baseline.
    ///
    /// The pointer delta is normalized against the container's rendered
    /// bounding box into percentage units, added to the baseline offset, and
    /// clamped per axis to [-50, 50]. Emits the descriptor on every move;
    /// returns `None` when not dragging or the container is degenerate.
    pub fn pointer_move(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        container: ContainerBounds,
    ) -> Option<DesignPosition> {
        let drag = self.drag?;
        if container.is_degenerate() {
            return None;
        }

        let delta_x = (pointer_x - drag.pointer_x) / container.width * 100.0;
        let delta_y = (pointer_y - drag.pointer_y) / container.height * 100.0;

        self.offset_x = clamp_offset(drag.offset_x + delta_x);
        self.offset_y = clamp_offset(drag.offset_y + delta_y);

        Some(self.descriptor())
    }

    /// Pointer up / leave / touch end: exit the dragging state.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Set the scale from the bounded control, clamped to [50, 150].
    ///
    /// Emits the updated descriptor immediately.
    pub fn set_scale(&mut self, scale: u16) -> DesignPosition {
        self.scale = scale.clamp(MIN_SCALE_PCT, MAX_SCALE_PCT);
        self.descriptor()
    }

    /// Reset position to the center and scale to 100%.
    pub fn reset(&mut self) -> DesignPosition {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.scale = 100;
        self.descriptor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: ContainerBounds = ContainerBounds {
        width: 400.0,
        height: 400.0,
    };

    fn editor_with_design() -> MockupEditor {
        let mut editor = MockupEditor::new(ProductKind::TShirt);
        editor.set_design_loaded(true);
        editor
    }

    #[test]
    fn test_drag_without_design_is_noop() {
        let mut editor = MockupEditor::new(ProductKind::TShirt);
        editor.pointer_down(10.0, 10.0);
        assert!(!editor.is_dragging());
        assert_eq!(editor.pointer_move(50.0, 50.0, CONTAINER), None);
    }

    #[test]
    fn test_drag_normalizes_against_container() {
        let mut editor = editor_with_design();
        editor.pointer_down(100.0, 100.0);
        assert!(editor.is_dragging());

        // 40px on a 400px container is 10%.
        let pos = editor
            .pointer_move(140.0, 60.0, CONTAINER)
            .expect("dragging");
        assert_eq!(pos.x, 10.0);
        assert_eq!(pos.y, -10.0);
        assert_eq!(pos.scale, 100);
    }

    #[test]
    fn test_drag_clamps_each_axis_independently() {
        let mut editor = editor_with_design();
        editor.pointer_down(0.0, 0.0);

        // x far beyond bounds, y within bounds.
        let pos = editor
            .pointer_move(4000.0, 80.0, CONTAINER)
            .expect("dragging");
        assert_eq!(pos.x, 50.0);
        assert_eq!(pos.y, 20.0);
    }

    #[test]
    fn test_drag_resumes_from_baseline_offset() {
        let mut editor = editor_with_design();
        editor.pointer_down(0.0, 0.0);
        editor.pointer_move(40.0, 0.0, CONTAINER);
        editor.pointer_up();
        assert!(!editor.is_dragging());

        // A second drag starts from the committed 10% offset.
        editor.pointer_down(200.0, 200.0);
        let pos = editor
            .pointer_move(240.0, 200.0, CONTAINER)
            .expect("dragging");
        assert_eq!(pos.x, 20.0);
    }

    #[test]
    fn test_move_after_pointer_up_emits_nothing() {
        let mut editor = editor_with_design();
        editor.pointer_down(0.0, 0.0);
        editor.pointer_up();
        assert_eq!(editor.pointer_move(100.0, 100.0, CONTAINER), None);
    }

    #[test]
    fn test_degenerate_container_is_ignored() {
        let mut editor = editor_with_design();
        editor.pointer_down(0.0, 0.0);
        let degenerate = ContainerBounds {
            width: 0.0,
            height: 400.0,
        };
        assert_eq!(editor.pointer_move(10.0, 10.0, degenerate), None);
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut editor = editor_with_design();
        assert_eq!(editor.set_scale(130).scale, 130);
        assert_eq!(editor.set_scale(10).scale, 50);
        assert_eq!(editor.set_scale(500).scale, 150);
    }

    #[test]
    fn test_scale_preserves_position() {
        let mut editor = editor_with_design();
        editor.pointer_down(0.0, 0.0);
        editor.pointer_move(40.0, 40.0, CONTAINER);
        editor.pointer_up();

        let pos = editor.set_scale(125);
        assert_eq!(pos.x, 10.0);
        assert_eq!(pos.y, 10.0);
        assert_eq!(pos.scale, 125);
    }

    #[test]
    fn test_reset_restores_defaults_exactly() {
        let mut editor = editor_with_design();
        editor.pointer_down(0.0, 0.0);
        editor.pointer_move(120.0, -80.0, CONTAINER);
        editor.pointer_up();
        editor.set_scale(65);

        let pos = editor.reset();
        assert_eq!(
            pos,
            DesignPosition {
                x: 0.0,
                y: 0.0,
                scale: 100
            }
        );
    }
}
