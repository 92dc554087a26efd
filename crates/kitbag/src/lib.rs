//! kitbag - Rust port of a TypeScript utility toolkit.
//!
//! Aggregates the four helper groups behind a single entry point. Each group
//! is available as a module and every function is also re-exported flat, so
//! both `kitbag::strings::capitalize` and `kitbag::capitalize` work.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! assert_eq!(kitbag::capitalize("hello world"), "Hello world");
//! assert_eq!(kitbag::to_camel_case("hello world"), "helloWorld");
//! assert_eq!(kitbag::unique(&[1, 2, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(kitbag::round_to(3.14159, 2), 3.14);
//!
//! let doc = json!({"a": {"b": {"c": 1}}});
//! assert_eq!(kitbag::get_nested(&doc, "a.b.c"), Some(&json!(1)));
//! ```

// Group modules
pub use kitbag_arrays as arrays;
pub use kitbag_numbers as numbers;
pub use kitbag_objects as objects;
pub use kitbag_strings as strings;

// Flat re-exports of the whole surface
pub use kitbag_arrays::{chunk, flatten, flatten_values, unique, unique_values};
pub use kitbag_numbers::{is_even, is_odd, random_between, round_to, SeededRandom};
pub use kitbag_objects::{
    deep_clone, get_nested, is_empty, is_empty_value, set_nested, PathError,
};
pub use kitbag_strings::{capitalize, is_blank, to_camel_case};
