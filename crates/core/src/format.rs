//! Display formatting for media durations and file sizes.

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a duration in seconds as whole minutes, e.g. `"42 min"`.
pub fn format_duration(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as u64;
    format!("{minutes} min")
}

/// Formats a byte count with 1024-based units and at most two decimals.
///
/// Trailing zeros are dropped, so one mebibyte renders as `"1 MB"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, BYTE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_rounds_to_minutes() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(29), "0 min");
        assert_eq!(format_duration(30), "1 min");
        assert_eq!(format_duration(2_520), "42 min");
        assert_eq!(format_duration(2_549), "42 min");
    }

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_bytes_two_decimals() {
        // 12.3456 MB
        assert_eq!(format_bytes(12_945_354), "12.35 MB");
    }
}
