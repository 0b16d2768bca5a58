//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the scene; they never mutate it.
//!
//! The trait is implemented here by a debug text renderer for CLI output and
//! tests; the wgpu backend lives in its own crate and shares the read-only
//! contract rather than the trait (it needs GPU handles per call).

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "shadowbox-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
