//! Developer Tooling: scene inspector.
//!
//! # Invariants
//! - Tools are read-only over the scene.

pub mod inspector;

pub use inspector::{ObjectInfo, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "shadowbox-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
