//! Cell formatting helpers: byte counts, timestamps, repair coverage.

use chrono::{DateTime, Utc};

/// Binary unit prefixes above plain bytes.
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Layout of repair timestamps, always rendered in UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a byte count with a binary unit, e.g. `"512 B"` or `"1.5 KiB"`.
pub fn human_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNIT_PREFIXES.len() {
        value /= 1024.0;
        unit += 1;
    }
    // One decimal can round e.g. 1023.97 up to "1024.0"; promote instead.
    if value >= 1023.95 && unit < UNIT_PREFIXES.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}iB", value, UNIT_PREFIXES[unit - 1])
}

/// Format epoch milliseconds as a UTC date and time.
///
/// Values outside chrono's calendar range fall back to the raw number.
pub fn format_timestamp(epoch_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_millis) {
        Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
        None => epoch_millis.to_string(),
    }
}

/// Format repair coverage as `"<repaired>/<files> <percent>%"`.
pub fn format_repair_coverage(repaired: u64, files: u64, percent: u64) -> String {
    format!("{}/{} {}%", repaired, files, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_bytes_small() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(1), "1 B");
        assert_eq!(human_bytes(1023), "1023 B");
    }

    #[test]
    fn test_human_bytes_scaled() {
        assert_eq!(human_bytes(1024), "1.0 KiB");
        assert_eq!(human_bytes(1536), "1.5 KiB");
        assert_eq!(human_bytes(5 * 1024 * 1024 * 1024), "5.0 GiB");
        assert_eq!(human_bytes(u64::MAX), "16.0 EiB");
    }

    #[test]
    fn test_human_bytes_rounding_promotes_unit() {
        assert_eq!(human_bytes(1_048_575), "1.0 MiB");
        assert_eq!(human_bytes(1024 * 1024 - 60), "1023.9 KiB");
        assert_eq!(human_bytes(1024u64.pow(3) - 1), "1.0 GiB");
    }

    #[test]
    fn test_human_bytes_monotonic_units() {
        let mib = human_bytes(3 * 1024 * 1024);
        assert!(mib.ends_with("MiB"));
        let tib = human_bytes(2 * 1024u64.pow(4));
        assert_eq!(tib, "2.0 TiB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1000), "1970-01-01 00:00:01");
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MIN), i64::MIN.to_string());
    }

    #[test]
    fn test_format_repair_coverage() {
        assert_eq!(format_repair_coverage(1, 2, 66), "1/2 66%");
        assert_eq!(format_repair_coverage(3, 3, 0), "3/3 0%");
    }
}
