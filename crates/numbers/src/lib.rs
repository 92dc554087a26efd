//! kitbag-numbers - Number utility functions.
//!
//! This crate provides numeric helpers ported from the TypeScript
//! `NumberUtils` class: random integers in a range, rounding to a fixed
//! number of decimals, and parity checks. A seeded generator is available
//! for reproducible sequences in tests.

pub mod parity;
pub mod random_between;
pub mod round_to;
pub mod seeded;

// Re-exports for convenience
pub use parity::{is_even, is_odd};
pub use random_between::random_between;
pub use round_to::round_to;
pub use seeded::SeededRandom;
