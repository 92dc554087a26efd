//! kitbag-strings - String utility functions.
//!
//! This crate provides string helpers ported from the TypeScript
//! `StringUtils` class: capitalization, camel-case conversion, and
//! blank checks.

pub mod capitalize;
pub mod is_blank;
pub mod to_camel_case;

// Re-exports for convenience
pub use capitalize::capitalize;
pub use is_blank::is_blank;
pub use to_camel_case::to_camel_case;
