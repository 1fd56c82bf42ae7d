/// Most fractional digits a formatted magnitude carries
pub const MAX_FRACTION_DIGITS: usize = 3;
/// Fewest fractional digits a formatted magnitude carries
pub const MIN_FRACTION_DIGITS: usize = 1;

/// Format a magnitude with between one and three fractional digits
///
/// Rounding is done by the standard float formatter, which rounds the exact
/// binary value and breaks exact ties to even. Trailing zeros are trimmed
/// until one fractional digit remains. No grouping separators are inserted.
pub fn format_magnitude(value: f64) -> String {
    let mut formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);

    let keep = match formatted.find('.') {
        Some(dot) => dot + 1 + MIN_FRACTION_DIGITS,
        None => formatted.len(),
    };
    while formatted.len() > keep && formatted.ends_with('0') {
        formatted.pop();
    }

    // "-0.0" only shows up when a tiny negative value rounds away
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted.remove(0);
    }

    formatted
}

/// Number of digits after the decimal point in a formatted magnitude
pub fn fraction_digits(formatted: &str) -> usize {
    formatted
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_to_one_digit() {
        assert_eq!(format_magnitude(0.0), "0.0");
        assert_eq!(format_magnitude(3937.0), "3937.0");
        assert_eq!(format_magnitude(2.5), "2.5");
        assert_eq!(format_magnitude(-12.0), "-12.0");
    }

    #[test]
    fn test_rounds_to_three_digits() {
        assert_eq!(format_magnitude(3.280_833_333), "3.281");
        assert_eq!(format_magnitude(0.393_700_787), "0.394");
        assert_eq!(format_magnitude(1.230_04), "1.23");
        assert_eq!(format_magnitude(0.999_9), "1.0");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_magnitude(-0.0), "0.0");
        assert_eq!(format_magnitude(-0.000_1), "0.0");
        assert_eq!(format_magnitude(-0.000_6), "-0.001");
    }

    #[test]
    fn test_no_grouping_separators() {
        assert_eq!(format_magnitude(1_234_567.891_2), "1234567.891");
    }

    #[test]
    fn test_fraction_digits_bound() {
        for value in [0.0, 0.1, 0.12, 0.123, 0.1234, 98765.4321, -5.5, 1e12] {
            let digits = fraction_digits(&format_magnitude(value));
            assert!(
                (MIN_FRACTION_DIGITS..=MAX_FRACTION_DIGITS).contains(&digits),
                "{} formatted with {} fractional digits",
                value,
                digits
            );
        }
    }
}
