//! Logical input actions for the demo.
//!
//! # Invariants
//! - The scene and app logic consume actions, never raw key events.
//! - This crate never depends on the windowing layer; binaries own the
//!   key-to-action mapping.

pub mod action;

pub use action::Action;

pub fn crate_info() -> &'static str {
    "shadowbox-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
