//! Normalized QR marker placement.

use serde::{Deserialize, Serialize};

/// Smallest marker edge, as a fraction of frame width.
pub const MIN_SIZE: f64 = 0.05;
/// Largest marker edge, as a fraction of frame width.
pub const MAX_SIZE: f64 = 0.4;
/// Slider granularity for the size control.
pub const SIZE_STEP: f64 = 0.01;
/// Value used for every field when the record has nothing stored.
pub const DEFAULT_VALUE: f64 = 0.15;

/// Position and scale of the QR marker within a 16:9 frame.
///
/// `x` and `y` are the normalized top-left anchor before the available
/// travel range is applied, `size` is the marker edge relative to frame
/// width. Every constructor clamps, so a `Placement` always satisfies
/// `0 <= x, y <= 1` and `MIN_SIZE <= size <= MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    x: f64,
    y: f64,
    size: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: DEFAULT_VALUE,
            y: DEFAULT_VALUE,
            size: DEFAULT_VALUE,
        }
    }
}

impl Placement {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
            size: clamp_size(size),
        }
    }

    /// Seeds a placement from optional stored values.
    pub fn from_stored(x: Option<f64>, y: Option<f64>, size: Option<f64>) -> Self {
        Self::new(
            x.unwrap_or(DEFAULT_VALUE),
            y.unwrap_or(DEFAULT_VALUE),
            size.unwrap_or(DEFAULT_VALUE),
        )
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.size)
    }

    #[must_use]
    pub fn with_size(self, size: f64) -> Self {
        Self::new(self.x, self.y, size)
    }
}

/// Clamps to `[0, 1]`. Non-finite input falls back to the default.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        DEFAULT_VALUE
    }
}

/// Clamps to `[MIN_SIZE, MAX_SIZE]`. Non-finite input falls back to the default.
pub fn clamp_size(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_SIZE, MAX_SIZE)
    } else {
        DEFAULT_VALUE
    }
}

/// Rounds to two decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placement() {
        let p = Placement::default();
        assert_eq!(p.x(), 0.15);
        assert_eq!(p.y(), 0.15);
        assert_eq!(p.size(), 0.15);
    }

    #[test]
    fn test_new_clamps_every_field() {
        let p = Placement::new(-2.0, 3.5, 0.9);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 1.0);
        assert_eq!(p.size(), MAX_SIZE);

        let p = Placement::new(0.5, 0.5, 0.0);
        assert_eq!(p.size(), MIN_SIZE);
    }

    #[test]
    fn test_non_finite_falls_back_to_default() {
        let p = Placement::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(p, Placement::default());
    }

    #[test]
    fn test_from_stored_uses_defaults_for_missing() {
        let p = Placement::from_stored(Some(0.7), None, Some(0.3));
        assert_eq!(p.x(), 0.7);
        assert_eq!(p.y(), DEFAULT_VALUE);
        assert_eq!(p.size(), 0.3);
    }

    #[test]
    fn test_with_size_keeps_position() {
        let p = Placement::new(0.9, 0.2, 0.1).with_size(0.4);
        assert_eq!(p.x(), 0.9);
        assert_eq!(p.y(), 0.2);
        assert_eq!(p.size(), 0.4);
    }

    #[test]
    fn test_round_hundredths() {
        assert_eq!(round_hundredths(0.123_456), 0.12);
        assert_eq!(round_hundredths(0.125_1), 0.13);
        assert_eq!(round_hundredths(1.0), 1.0);
    }
}
