//! Rendering Adapter: renderer-agnostic view of a chase session.
//!
//! # Invariants
//! - Renderers read the session; they never mutate it.
//! - Camera and viewport changes have no effect on game logic.
//!
//! Ships a text renderer; a GPU backend implements the same trait.

mod camera;
mod renderer;

pub use camera::FollowCamera;
pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "chase-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
