//! Human-readable file sizes.

/// Bytes per unit step (binary units).
pub const UNIT_STEP: u64 = 1024;

/// Default upload ceiling: 4 GiB.
pub const MAX_FILE_SIZE: u64 = 4 * UNIT_STEP * UNIT_STEP * UNIT_STEP;

/// Unit names, smallest first. Sizes beyond the last unit stay in it.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display.
///
/// Uses base-1024 steps and rounds to at most two decimal places,
/// dropping trailing zeros (`1536` is `"1.5 KB"`, `1024` is `"1 KB"`).
/// Zero is the literal `"0 Bytes"`. Sizes of 1 TiB and more are still
/// expressed in GB.
///
/// Rounding happens after the unit is chosen, so a value just under a
/// step boundary can display as `"1024 KB"` rather than `"1 MB"`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Bytes");
    }

    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit < UNITS.len() - 1 && bytes >= divisor * UNIT_STEP {
        divisor *= UNIT_STEP;
        unit += 1;
    }

    // Precision loss only matters above 2^53 bytes (8 PiB).
    #[allow(clippy::cast_precision_loss)]
    let scaled = bytes as f64 / divisor as f64;
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{rounded} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn small_values_stay_in_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(123), "123 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn whole_units_have_no_decimals() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(MAX_FILE_SIZE), "4 GB");
    }

    #[test]
    fn fractional_values_round_to_two_places() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
    }

    #[test]
    fn rounding_can_reach_the_next_step() {
        assert_eq!(format_file_size(1024 * 1024 - 1), "1024 KB");
    }

    #[test]
    fn terabytes_are_expressed_in_gigabytes() {
        assert_eq!(format_file_size(UNIT_STEP.pow(4)), "1024 GB");
        assert_eq!(format_file_size(5 * UNIT_STEP.pow(4)), "5120 GB");
    }

    #[test]
    fn ceiling_is_four_gibibytes() {
        assert_eq!(MAX_FILE_SIZE, 4_294_967_296);
    }
}
