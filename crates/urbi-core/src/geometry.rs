//! Mapping between normalized placement and on-screen layout.
//!
//! The frame is always 16:9. A marker of edge `size` (fraction of frame
//! width) can only move its top-left corner across the part of the frame it
//! does not cover, so both directions scale `x` and `y` by the available
//! travel fraction:
//!
//! ```text
//! available_x = 1 - size
//! available_y = (ASPECT_RATIO - size) / ASPECT_RATIO
//! ```
//!
//! The forward transform is used for rendering, the inverse one while the
//! marker is dragged.

use crate::placement::{Placement, clamp_unit, round_hundredths};

/// Frame height divided by frame width (16:9).
pub const ASPECT_RATIO: f64 = 9.0 / 16.0;

/// Fraction of frame width and height the marker's top-left corner can travel.
pub fn available_travel(size: f64) -> (f64, f64) {
    (1.0 - size, (ASPECT_RATIO - size) / ASPECT_RATIO)
}

/// Pixel height of a frame with the given pixel width.
pub fn frame_height(width: f64) -> f64 {
    width * ASPECT_RATIO
}

/// Marker layout in percent of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLayout {
    pub left_percent: f64,
    pub top_percent: f64,
    /// Marker width; its height follows from a 1:1 aspect constraint.
    pub width_percent: f64,
}

impl MarkerLayout {
    pub fn for_placement(placement: &Placement) -> Self {
        let (avail_x, avail_y) = available_travel(placement.size());
        Self {
            left_percent: avail_x * placement.x() * 100.0,
            top_percent: avail_y * placement.y() * 100.0,
            width_percent: placement.size() * 100.0,
        }
    }

    /// Top-left corner in pixels, relative to a frame of the given width.
    pub fn pixel_origin(&self, frame_width: f64) -> (f64, f64) {
        (
            self.left_percent / 100.0 * frame_width,
            self.top_percent / 100.0 * frame_height(frame_width),
        )
    }

    /// Marker edge in pixels.
    pub fn pixel_size(&self, frame_width: f64) -> f64 {
        self.width_percent / 100.0 * frame_width
    }
}

/// Bounding rectangle of the rendered frame, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A 16:9 frame of the given width at the origin.
    pub fn with_width(width: f64) -> Self {
        Self::new(0.0, 0.0, width, frame_height(width))
    }

    /// Whether the rectangle can be used as a divisor.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position as a fraction of the rectangle.
    pub fn fraction_of(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !self.is_measurable() {
            return None;
        }
        Some((
            (client_x - self.left) / self.width,
            (client_y - self.top) / self.height,
        ))
    }
}

/// Where inside the marker the pointer grabbed it, as a fraction of the
/// container size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrabOffset {
    pub x: f64,
    pub y: f64,
}

impl GrabOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of a pointer at `(client_x, client_y)` from the marker's
    /// top-left corner `(marker_left, marker_top)`, both in client pixels.
    pub fn from_pointer(
        client_x: f64,
        client_y: f64,
        marker_left: f64,
        marker_top: f64,
        rect: &ContainerRect,
    ) -> Option<Self> {
        if !rect.is_measurable() {
            return None;
        }
        Some(Self {
            x: (client_x - marker_left) / rect.width,
            y: (client_y - marker_top) / rect.height,
        })
    }
}

/// Inverse transform: pointer position to normalized `(x, y)`.
///
/// Returns `None` when the marker has no room to travel or the container
/// cannot be measured. The result is clamped to `[0, 1]` and rounded to
/// hundredths.
pub fn position_from_pointer(
    client_x: f64,
    client_y: f64,
    rect: &ContainerRect,
    offset: GrabOffset,
    size: f64,
) -> Option<(f64, f64)> {
    let (avail_x, avail_y) = available_travel(size);
    if !(avail_x > 0.0 && avail_y > 0.0) {
        return None;
    }

    let (mouse_x, mouse_y) = rect.fraction_of(client_x, client_y)?;
    let screen_x = mouse_x - offset.x;
    let screen_y = mouse_y - offset.y;

    let x = clamp_unit(screen_x / avail_x);
    let y = clamp_unit(screen_y / avail_y);
    Some((round_hundredths(x), round_hundredths(y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.01 + 1e-9;

    fn client_origin(rect: &ContainerRect, placement: &Placement) -> (f64, f64) {
        let (px, py) = MarkerLayout::for_placement(placement).pixel_origin(rect.width);
        (rect.left + px, rect.top + py)
    }

    #[test]
    fn test_available_travel() {
        let (ax, ay) = available_travel(0.15);
        assert!((ax - 0.85).abs() < 1e-12);
        assert!((ay - (0.5625 - 0.15) / 0.5625).abs() < 1e-12);
    }

    #[test]
    fn test_forward_layout() {
        let layout = MarkerLayout::for_placement(&Placement::new(0.5, 1.0, 0.2));
        assert!((layout.left_percent - 40.0).abs() < 1e-9);
        assert!((layout.top_percent - (0.3625 / 0.5625) * 100.0).abs() < 1e-9);
        assert!((layout.width_percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_marker_stays_inside_frame() {
        let width = 640.0;
        let height = frame_height(width);
        for size_step in 5..=40 {
            let size = f64::from(size_step) / 100.0;
            for corner in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
                let layout = MarkerLayout::for_placement(&Placement::new(corner.0, corner.1, size));
                let (left, top) = layout.pixel_origin(width);
                let edge = layout.pixel_size(width);
                assert!(left >= -1e-9 && left + edge <= width + 1e-9);
                assert!(top >= -1e-9 && top + edge <= height + 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip_through_top_left_corner() {
        let rect = ContainerRect::new(37.0, 120.0, 400.0, 225.0);
        for size_step in [5, 10, 15, 22, 30, 40] {
            let size = f64::from(size_step) / 100.0;
            for xi in 0..=10 {
                for yi in 0..=10 {
                    let placement =
                        Placement::new(f64::from(xi) / 10.0, f64::from(yi) / 10.0, size);
                    let (cx, cy) = client_origin(&rect, &placement);

                    let (x, y) =
                        position_from_pointer(cx, cy, &rect, GrabOffset::default(), size)
                            .expect("valid size must map back");
                    assert!((x - placement.x()).abs() <= TOLERANCE, "x {x} vs {placement:?}");
                    assert!((y - placement.y()).abs() <= TOLERANCE, "y {y} vs {placement:?}");
                }
            }
        }
    }

    #[test]
    fn test_inverse_clamps_far_outside_pointer() {
        let rect = ContainerRect::with_width(400.0);
        let offset = GrabOffset::new(0.02, 0.03);
        for (cx, cy) in [(-1e6, -1e6), (1e6, 1e6), (-1e6, 1e6), (1e6, -50.0)] {
            let (x, y) = position_from_pointer(cx, cy, &rect, offset, 0.15).unwrap();
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..=1.0).contains(&y));
        }
        assert_eq!(
            position_from_pointer(-1e6, -1e6, &rect, offset, 0.15),
            Some((0.0, 0.0))
        );
        assert_eq!(
            position_from_pointer(1e6, 1e6, &rect, offset, 0.15),
            Some((1.0, 1.0))
        );
    }

    #[test]
    fn test_degenerate_size_is_a_no_op() {
        let rect = ContainerRect::with_width(400.0);
        assert_eq!(
            position_from_pointer(10.0, 10.0, &rect, GrabOffset::default(), 1.0),
            None
        );
        assert_eq!(
            position_from_pointer(10.0, 10.0, &rect, GrabOffset::default(), 16.0 / 9.0),
            None
        );
        assert_eq!(
            position_from_pointer(10.0, 10.0, &rect, GrabOffset::default(), 3.0),
            None
        );
        // availableY hits zero first at size == ASPECT_RATIO
        assert_eq!(
            position_from_pointer(10.0, 10.0, &rect, GrabOffset::default(), ASPECT_RATIO),
            None
        );
    }

    #[test]
    fn test_unmeasured_container_is_a_no_op() {
        let offset = GrabOffset::default();
        assert_eq!(
            position_from_pointer(10.0, 10.0, &ContainerRect::new(0.0, 0.0, 0.0, 0.0), offset, 0.15),
            None
        );
        assert_eq!(
            position_from_pointer(10.0, 10.0, &ContainerRect::new(0.0, 0.0, f64::NAN, 1.0), offset, 0.15),
            None
        );
        assert!(GrabOffset::from_pointer(1.0, 1.0, 0.0, 0.0, &ContainerRect::with_width(0.0)).is_none());
    }

    #[test]
    fn test_grab_offset_shifts_result_by_offset() {
        let rect = ContainerRect::with_width(400.0);
        let size = 0.15;
        let (avail_x, avail_y) = available_travel(size);
        let (cx, cy) = (300.0, 150.0);

        let at_corner = position_from_pointer(cx, cy, &rect, GrabOffset::default(), size).unwrap();
        let half = GrabOffset::new(0.5, 0.5);
        let at_half = position_from_pointer(cx, cy, &rect, half, size).unwrap();

        let expected_corner = (
            round_hundredths(clamp_unit((cx / rect.width) / avail_x)),
            round_hundredths(clamp_unit((cy / rect.height) / avail_y)),
        );
        let expected_half = (
            round_hundredths(clamp_unit((cx / rect.width - 0.5) / avail_x)),
            round_hundredths(clamp_unit((cy / rect.height - 0.5) / avail_y)),
        );
        assert_eq!(at_corner, expected_corner);
        assert_eq!(at_half, expected_half);
        assert_ne!(at_corner, at_half);
    }

    #[test]
    fn test_grab_at_marker_center_differs_by_half_marker() {
        let rect = ContainerRect::with_width(400.0);
        let placement = Placement::new(0.4, 0.4, 0.2);
        let layout = MarkerLayout::for_placement(&placement);
        let (left, top) = layout.pixel_origin(rect.width);
        let edge = layout.pixel_size(rect.width);

        let center = GrabOffset::from_pointer(
            left + edge / 2.0,
            top + edge / 2.0,
            left,
            top,
            &rect,
        )
        .unwrap();
        assert!((center.x * rect.width - edge / 2.0).abs() < 1e-9);
        assert!((center.y * rect.height - edge / 2.0).abs() < 1e-9);

        // Same final pointer; the centre grab puts the top-left half a marker
        // up and to the left of where the corner grab puts it.
        let (cx, cy) = (260.0, 130.0);
        let (x0, y0) = position_from_pointer(cx, cy, &rect, GrabOffset::default(), 0.2).unwrap();
        let (x1, y1) = position_from_pointer(cx, cy, &rect, center, 0.2).unwrap();
        let (avail_x, avail_y) = available_travel(0.2);
        let dx_px = (x0 - x1) * avail_x * rect.width;
        let dy_px = (y0 - y1) * avail_y * rect.height;
        assert!((dx_px - edge / 2.0).abs() <= 0.01 * avail_x * rect.width + 1e-9);
        assert!((dy_px - edge / 2.0).abs() <= 0.01 * avail_y * rect.height + 1e-9);
    }

    #[test]
    fn test_scenario_drag_from_corner_to_center() {
        // 400px wide frame, 225px tall, marker grabbed at its top-left corner.
        let rect = ContainerRect::with_width(400.0);
        assert!((rect.height - 225.0).abs() < 1e-9);

        let placement = Placement::new(0.15, 0.15, 0.15);
        let (left, top) = client_origin(&rect, &placement);
        let offset = GrabOffset::from_pointer(left, top, left, top, &rect).unwrap();
        assert_eq!(offset, GrabOffset::default());

        // Recovering (0.5, 0.5): the marker's top-left sits at the travel-scaled point.
        let target = Placement::new(0.5, 0.5, 0.15);
        let (tx, ty) = client_origin(&rect, &target);
        assert_eq!(
            position_from_pointer(tx, ty, &rect, offset, 0.15),
            Some((0.5, 0.5))
        );

        // Exact frame centre maps through the travel fractions 0.85 and ~0.7333.
        let (x, y) = position_from_pointer(200.0, 112.5, &rect, offset, 0.15).unwrap();
        assert_eq!(x, round_hundredths(0.5 / 0.85));
        assert_eq!(y, round_hundredths(0.5 / ((0.5625 - 0.15) / 0.5625)));
    }

    #[test]
    fn test_scenario_max_size_never_overflows() {
        let placement = Placement::new(0.9, 0.5, 0.15).with_size(0.4);
        let layout = MarkerLayout::for_placement(&placement);
        assert!(layout.left_percent <= 54.0 + 1e-9);
        assert!(layout.left_percent + layout.width_percent <= 100.0);
    }
}
