//! Developer Tooling: read-only inspection of a running session.
//!
//! # Invariants
//! - Inspection never mutates the session.

mod inspector;

pub use inspector::{ActorInfo, IndexSummary, SessionInspector, SessionSummary};

pub fn crate_info() -> &'static str {
    "chase-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
