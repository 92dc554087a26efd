use rand::Rng;

/// Generate a uniformly distributed random integer in `[min, max]`
/// (inclusive).
///
/// Uses the process-wide thread RNG. Reversed bounds are swapped rather than
/// rejected.
///
/// # Examples
///
/// ```
/// use kitbag_numbers::random_between;
///
/// let n = random_between(1, 10);
/// assert!((1..=10).contains(&n));
///
/// assert_eq!(random_between(7, 7), 7);
/// ```
pub fn random_between(min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(lo..=hi)
}
