use web_sys::{DomRect, Element, HtmlCanvasElement};

use tentori_core::{BoardLayout, DragGesture};

/// Physical input source feeding the gesture. Mouse and touch arrive through
/// different DOM events but converge on the same three drag operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
}

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for HtmlCanvasElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

/// Map screen coordinates to canvas-local pixels. `None` for a degenerate
/// rect (detached or zero-sized element); callers drop the event.
pub(crate) fn screen_to_canvas_coords(
    screen_x: f64,
    screen_y: f64,
    element: &impl HasClientRect,
) -> Option<(f64, f64)> {
    let rect = element.client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some((screen_x - rect.left(), screen_y - rect.top()))
}

/// Drag state machine shared by both input adapters. One gesture at a time;
/// whichever pointer kind starts it owns it until the end call.
#[derive(Default)]
pub(crate) struct GestureTracker {
    gesture: DragGesture,
    active_kind: Option<PointerKind>,
}

impl GestureTracker {
    pub(crate) fn gesture(&self) -> DragGesture {
        self.gesture
    }

    /// Snap to the nearest dot and open a gesture. Returns whether the
    /// provisional line changed (i.e. a render pass is due).
    pub(crate) fn on_drag_start(
        &mut self,
        layout: &BoardLayout,
        kind: PointerKind,
        x: f64,
        y: f64,
    ) -> bool {
        if self.active_kind.is_some_and(|active| active != kind) {
            return false;
        }
        self.active_kind = Some(kind);
        self.gesture.begin(layout.nearest_dot(x, y));
        true
    }

    /// No-op without an open gesture of the same kind.
    pub(crate) fn on_drag_update(
        &mut self,
        layout: &BoardLayout,
        kind: PointerKind,
        x: f64,
        y: f64,
    ) -> bool {
        if self.active_kind != Some(kind) || self.gesture.start().is_none() {
            return false;
        }
        self.gesture.update(layout.nearest_dot(x, y))
    }

    /// Close the gesture and hand it to the caller for a commit attempt.
    /// Always clears, whether or not the commit succeeds.
    pub(crate) fn on_drag_end(&mut self) -> DragGesture {
        let finished = self.gesture;
        self.gesture.clear();
        self.active_kind = None;
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tentori_core::Dot;

    fn layout() -> BoardLayout {
        BoardLayout::from_container_width(482.0)
    }

    #[test]
    fn drag_start_snaps_to_the_nearest_dot() {
        let layout = layout();
        let mut tracker = GestureTracker::default();
        let (x, y) = layout.dot_px(Dot::new(2, 3));
        assert!(tracker.on_drag_start(&layout, PointerKind::Mouse, x + 4.0, y - 4.0));
        assert_eq!(tracker.gesture().start(), Some(Dot::new(2, 3)));
    }

    #[test]
    fn update_before_start_is_ignored() {
        let layout = layout();
        let mut tracker = GestureTracker::default();
        assert!(!tracker.on_drag_update(&layout, PointerKind::Mouse, 30.0, 30.0));
        assert_eq!(tracker.gesture().endpoints(), None);
    }

    #[test]
    fn second_input_kind_cannot_steal_a_gesture() {
        let layout = layout();
        let mut tracker = GestureTracker::default();
        assert!(tracker.on_drag_start(&layout, PointerKind::Touch, 12.0, 12.0));
        assert!(!tracker.on_drag_start(&layout, PointerKind::Mouse, 60.0, 60.0));
        assert!(!tracker.on_drag_update(&layout, PointerKind::Mouse, 60.0, 60.0));
        assert_eq!(tracker.gesture().start(), Some(Dot::new(0, 0)));
    }

    #[test]
    fn unchanged_end_does_not_request_a_redraw() {
        let layout = layout();
        let mut tracker = GestureTracker::default();
        let (ax, ay) = layout.dot_px(Dot::new(0, 0));
        let (bx, by) = layout.dot_px(Dot::new(1, 0));
        tracker.on_drag_start(&layout, PointerKind::Mouse, ax, ay);
        assert!(tracker.on_drag_update(&layout, PointerKind::Mouse, bx, by));
        // Pointer jitter within the same snapped dot changes nothing.
        assert!(!tracker.on_drag_update(&layout, PointerKind::Mouse, bx + 2.0, by - 2.0));
    }

    #[test]
    fn end_returns_the_gesture_and_clears() {
        let layout = layout();
        let mut tracker = GestureTracker::default();
        let (ax, ay) = layout.dot_px(Dot::new(0, 0));
        let (bx, by) = layout.dot_px(Dot::new(1, 0));
        tracker.on_drag_start(&layout, PointerKind::Mouse, ax, ay);
        tracker.on_drag_update(&layout, PointerKind::Mouse, bx, by);
        let finished = tracker.on_drag_end();
        assert_eq!(finished.endpoints(), Some((Dot::new(0, 0), Dot::new(1, 0))));
        assert!(finished.is_valid_candidate());
        assert_eq!(tracker.gesture().endpoints(), None);
        // A fresh gesture can start from either input kind again.
        assert!(tracker.on_drag_start(&layout, PointerKind::Touch, ax, ay));
    }
}
