/// Check if a number is even.
///
/// # Examples
///
/// ```
/// use kitbag_numbers::{is_even, is_odd};
///
/// assert!(is_even(4));
/// assert!(is_odd(-3));
/// ```
pub fn is_even(num: i64) -> bool {
    num % 2 == 0
}

/// Check if a number is odd.
///
/// Correct for negatives: `-3 % 2` is `-1` in Rust, which is nonzero.
pub fn is_odd(num: i64) -> bool {
    num % 2 != 0
}
