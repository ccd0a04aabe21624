//! Shared geometry for the castle chase: boxes, poses, static scene bodies.
//!
//! # Invariants
//! - Everything here is plain data with no rendering dependency.
//! - Boxes are axis-aligned in world space; touching boxes intersect.

mod aabb;
mod types;

pub use aabb::Aabb;
pub use types::{BodyKind, Pose, StaticBody};
