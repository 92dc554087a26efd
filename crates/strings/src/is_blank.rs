/// Check if a string is empty or contains only whitespace.
///
/// # Examples
///
/// ```
/// use kitbag_strings::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   \t\n"));
/// assert!(!is_blank("hello"));
/// ```
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
