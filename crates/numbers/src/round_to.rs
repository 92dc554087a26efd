/// Round a number to the given number of decimal places.
///
/// This is the Rust equivalent of the TypeScript
/// `Number(num.toFixed(decimals))`: the value is formatted with fixed
/// precision and reparsed, so ties resolve the way native decimal
/// formatting resolves them. The result is numeric, not a string.
///
/// `NaN` and the infinities format to strings that reparse to themselves,
/// so they pass through unchanged.
///
/// # Examples
///
/// ```
/// use kitbag_numbers::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// assert_eq!(round_to(1.0, 3), 1.0);
/// ```
pub fn round_to(num: f64, decimals: usize) -> f64 {
    // Fixed-precision formatting always yields a parsable float.
    format!("{num:.decimals$}")
        .parse()
        .expect("fixed-precision float reparses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(3.14159, 2), 3.14);
    }

    #[test]
    fn test_round_to_rounds_up() {
        assert_eq!(round_to(3.146, 2), 3.15);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to(3.7, 0), 4.0);
    }

    #[test]
    fn test_round_to_negative_numbers() {
        assert_eq!(round_to(-3.14159, 2), -3.14);
        assert_eq!(round_to(-3.146, 2), -3.15);
    }

    #[test]
    fn test_round_to_more_decimals_than_present() {
        assert_eq!(round_to(1.5, 5), 1.5);
    }

    #[test]
    fn test_round_to_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }
}
