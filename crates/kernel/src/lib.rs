//! Chase Kernel: the per-frame simulation of the castle chase.
//!
//! # Invariants
//! - The collision index is immutable once a session is built.
//! - All state mutations happen inside `Session::step` (or `reset`).
//! - Given the same seed and key sequence, a session replays identically.

pub mod chase;
pub mod collision;
pub mod config;
pub mod player;
pub mod session;

pub use chase::{ChaseMode, ChaseStep, Chaser, ModeKind, Mood};
pub use collision::{CollisionIndex, PROBE_HEIGHT};
pub use config::{ChaseConfig, ConfigError};
pub use player::PlayerMove;
pub use session::{Enemy, Session, SessionEvent, StepOutcome};

pub fn crate_info() -> &'static str {
    "chase-kernel v0.1.0"
}
