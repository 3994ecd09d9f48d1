/// Decimal places kept on every derived number in the generated CSS
pub const PRECISION: i32 = 4;

/// Round to 4 decimal places, halves rounding towards positive infinity
pub fn round(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (value * scale + 0.5).floor() / scale
}

/// Format a number the way it should appear in CSS text
/// Shortest round-trip form, no trailing ".0", and never "-0"
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Format a number followed by a unit suffix, e.g. "1.5rem"
pub fn format_length(value: f64, suffix: &str) -> String {
    format!("{}{}", format_number(value), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_four_places() {
        assert_eq!(round(13.333333), 13.3333);
        assert_eq!(round(3.33333333), 3.3333);
        assert_eq!(round(2.0), 2.0);
        assert_eq!(round(0.00004), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(-2.71828), -2.7183);
        assert_eq!(round(0.5), 0.5);
        assert_eq!(round(-0.00005), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(5.3333), "5.3333");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(1.0, "rem"), "1rem");
        assert_eq!(format_length(3.3333, "vw"), "3.3333vw");
    }
}
