//! Preview media seeking.

/// `HTMLMediaElement.HAVE_METADATA`.
pub const HAVE_METADATA: u16 = 1;

/// Time to seek the preview to so it shows the frame where the QR code appears.
///
/// Never past the end of the media. An unknown (non-finite) duration leaves
/// the target untouched, a negative or non-finite target seeks to the start.
pub fn seek_position(target_seconds: f64, duration: f64) -> f64 {
    let target = if target_seconds.is_finite() {
        target_seconds.max(0.0)
    } else {
        0.0
    };
    if duration.is_finite() {
        target.min(duration.max(0.0))
    } else {
        target
    }
}
