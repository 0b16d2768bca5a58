//! Shared spatial types used across the shadowbox crates.
//!
//! # Invariants
//! - `Transform::matrix()` composes scale, then rotation, then translation.

pub mod types;

pub use types::Transform;
