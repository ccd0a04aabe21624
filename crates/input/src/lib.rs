//! Input: raw key events filtered to four directional keys.
//!
//! # Invariants
//! - Unknown key codes never change state.
//! - Each direction is held independently; opposite keys may be held together.

pub mod keys;

pub use keys::{Direction, KeyEvent, KeyState};

pub fn crate_info() -> &'static str {
    "chase-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
