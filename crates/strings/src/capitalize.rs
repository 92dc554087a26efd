/// Capitalize the first letter of a string.
///
/// This is the Rust equivalent of the TypeScript `StringUtils.capitalize`:
/// the first character is upper-cased and the remainder lower-cased. An empty
/// string is returned unchanged.
///
/// Upper-casing follows Unicode rules, so the first character may expand to
/// more than one character (e.g. `'ß'` becomes `"SS"`).
///
/// # Examples
///
/// ```
/// use kitbag_strings::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize("HELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}
