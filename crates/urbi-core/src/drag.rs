//! Drag gesture state for the QR marker.
//!
//! Pure state machine; the client installs document listeners while
//! [`DragController::is_dragging`] is true and routes pointer events here.

use crate::geometry::{ContainerRect, GrabOffset, position_from_pointer};

/// Current gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// The grab offset is fixed for the whole gesture so the marker does not
    /// jump to centre-under-cursor.
    Dragging { offset: GrabOffset },
}

/// Tracks a single positioning gesture.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn offset(&self) -> Option<GrabOffset> {
        match self.phase {
            DragPhase::Dragging { offset } => Some(offset),
            DragPhase::Idle => None,
        }
    }

    /// Pointer pressed on the marker.
    ///
    /// `marker_left`/`marker_top` are the marker's client-space corner. Does
    /// nothing and returns `false` when the container is not measured yet.
    pub fn pointer_down(
        &mut self,
        client_x: f64,
        client_y: f64,
        marker_left: f64,
        marker_top: f64,
        container: Option<ContainerRect>,
    ) -> bool {
        let Some(rect) = container else {
            return false;
        };
        let Some(offset) = GrabOffset::from_pointer(client_x, client_y, marker_left, marker_top, &rect)
        else {
            return false;
        };
        tracing::debug!(offset_x = offset.x, offset_y = offset.y, "marker drag started");
        self.phase = DragPhase::Dragging { offset };
        true
    }

    /// Pointer moved while the gesture may be active.
    ///
    /// Returns the new clamped, rounded `(x, y)` or `None` when idle, when
    /// the container is missing, or when `size` leaves no room to travel.
    pub fn pointer_move(
        &self,
        client_x: f64,
        client_y: f64,
        container: Option<ContainerRect>,
        size: f64,
    ) -> Option<(f64, f64)> {
        let offset = self.offset()?;
        let rect = container?;
        position_from_pointer(client_x, client_y, &rect, offset, size)
    }

    /// Pointer released anywhere. Returns whether a gesture ended.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            tracing::debug!("marker drag ended");
        }
        self.phase = DragPhase::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MarkerLayout;
    use crate::placement::Placement;

    fn rect() -> Option<ContainerRect> {
        Some(ContainerRect::new(10.0, 20.0, 400.0, 225.0))
    }

    #[test]
    fn test_starts_idle() {
        let controller = DragController::new();
        assert_eq!(controller.phase(), DragPhase::Idle);
        assert!(controller.offset().is_none());
        assert_eq!(controller.pointer_move(100.0, 100.0, rect(), 0.15), None);
    }

    #[test]
    fn test_pointer_down_captures_offset() {
        let mut controller = DragController::new();
        assert!(controller.pointer_down(70.0, 65.0, 50.0, 20.0, rect()));
        assert!(controller.is_dragging());

        let offset = controller.offset().unwrap();
        assert!((offset.x - 20.0 / 400.0).abs() < 1e-12);
        assert!((offset.y - 45.0 / 225.0).abs() < 1e-12);
    }

    #[test]
    fn test_pointer_down_without_container_is_ignored() {
        let mut controller = DragController::new();
        assert!(!controller.pointer_down(70.0, 65.0, 50.0, 20.0, None));
        assert!(!controller.is_dragging());

        let zero = Some(ContainerRect::new(0.0, 0.0, 0.0, 0.0));
        assert!(!controller.pointer_down(70.0, 65.0, 50.0, 20.0, zero));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_moves_stream_positions_until_release() {
        let container = rect();
        let placement = Placement::default();
        let (px, py) = MarkerLayout::for_placement(&placement).pixel_origin(400.0);
        let (left, top) = (10.0 + px, 20.0 + py);

        let mut controller = DragController::new();
        assert!(controller.pointer_down(left, top, left, top, container));

        let positions: Vec<_> = [(60.0, 40.0), (110.0, 80.0), (210.0, 132.5)]
            .into_iter()
            .filter_map(|(cx, cy)| controller.pointer_move(cx, cy, container, 0.15))
            .collect();
        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));

        assert!(controller.pointer_up());
        assert!(!controller.pointer_up());
        assert_eq!(controller.pointer_move(300.0, 200.0, container, 0.15), None);
    }

    #[test]
    fn test_move_without_container_keeps_last_position() {
        let mut controller = DragController::new();
        assert!(controller.pointer_down(10.0, 20.0, 10.0, 20.0, rect()));
        assert_eq!(controller.pointer_move(200.0, 100.0, None, 0.15), None);
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_degenerate_size_while_dragging() {
        let mut controller = DragController::new();
        assert!(controller.pointer_down(10.0, 20.0, 10.0, 20.0, rect()));
        assert_eq!(controller.pointer_move(200.0, 100.0, rect(), 1.0), None);
        assert_eq!(controller.pointer_move(200.0, 100.0, rect(), 2.0), None);
    }
}
