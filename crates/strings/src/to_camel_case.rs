use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Word-start heuristic (mirrors the upstream `(?:^\w|[A-Z]|\b\w)` regex).
fn word_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w|[A-Z]|\b\w").unwrap())
}

/// Convert a string to camelCase.
///
/// This is the Rust equivalent of the TypeScript `StringUtils.toCamelCase`.
/// Word starts are located with the upstream regex heuristic; the match at
/// byte offset 0 is lower-cased and every later match upper-cased, then all
/// whitespace is removed.
///
/// Non-whitespace separators are kept as-is, exactly as upstream: a match
/// immediately after `-` counts as a word start, but the `-` itself survives.
///
/// # Examples
///
/// ```
/// use kitbag_strings::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("Hello World"), "helloWorld");
/// assert_eq!(to_camel_case("foo bar baz"), "fooBarBaz");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let replaced = word_start_regex().replace_all(s, |caps: &Captures| {
        // Group 0 always exists for a match.
        let m = caps.get(0).expect("whole-match group");
        if m.start() == 0 {
            m.as_str().to_lowercase()
        } else {
            m.as_str().to_uppercase()
        }
    });
    replaced.chars().filter(|ch| !ch.is_whitespace()).collect()
}
