//! kitbag-objects - Object utility functions.
//!
//! This crate provides helpers ported from the TypeScript `ObjectUtils`
//! class, operating on `serde_json::Value` as the dynamic value type:
//! deep cloning, emptiness checks, and dot-path access to nested values.

pub mod deep_clone;
pub mod get_nested;
pub mod is_empty;
pub mod set_nested;

// Re-exports for convenience
pub use deep_clone::deep_clone;
pub use get_nested::get_nested;
pub use is_empty::{is_empty, is_empty_value};
pub use set_nested::{set_nested, PathError};
