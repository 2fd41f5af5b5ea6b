//! Display formatting helpers.

use chrono::{DateTime, NaiveDateTime};

const FILE_SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// "Jan 2, 2025". Unparseable input is returned as-is.
pub fn format_date(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || value.to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// "Jan 2, 2025, 03:04 PM". Unparseable input is returned as-is.
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || value.to_string(),
        |dt| dt.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}

/// Human readable byte count with two decimals at most ("1.5 MB").
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let bytes = bytes as f64;
    let exponent = (bytes.ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(FILE_SIZE_UNITS.len() - 1);
    let scaled = bytes / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", FILE_SIZE_UNITS[exponent])
}

/// Fraction as a whole percentage ("15%").
pub fn percent_label(fraction: f64) -> String {
    format!("{:.0}%", (fraction * 100.0).round())
}

/// Hit counter chip text; `None` while the count is still loading.
pub fn hits_label(count: Option<usize>) -> String {
    match count {
        Some(count) => format!("{count} hits"),
        None => "... hits".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-02T15:04:05Z"), "Jan 2, 2025");
        assert_eq!(format_date("2025-11-20T08:00:00.123"), "Nov 20, 2025");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time("2025-01-02T15:04:05Z"),
            "Jan 2, 2025, 03:04 PM"
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3072 GB");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.15), "15%");
        assert_eq!(percent_label(0.4), "40%");
        assert_eq!(percent_label(1.0), "100%");
    }

    #[test]
    fn test_hits_label() {
        assert_eq!(hits_label(Some(3)), "3 hits");
        assert_eq!(hits_label(None), "... hits");
    }
}
