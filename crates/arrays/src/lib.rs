//! kitbag-arrays - Array utility functions.
//!
//! This crate provides sequence helpers ported from the TypeScript
//! `ArrayUtils` class: de-duplication, chunking, and one-level flattening.
//! Each helper comes in a generic flavor for typed slices and, where the
//! upstream accepted heterogeneous arrays, a `serde_json::Value` flavor.

pub mod chunk;
pub mod flatten;
pub mod unique;

// Re-exports for convenience
pub use chunk::chunk;
pub use flatten::{flatten, flatten_values};
pub use unique::{unique, unique_values};
