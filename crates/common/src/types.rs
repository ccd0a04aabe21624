use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// Position plus facing for an actor (player or enemy).
///
/// Yaw is measured about +Y with 0 facing +Z, so facing a point at
/// offset `(dx, dz)` is `atan2(dx, dz)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Turn to face `point` on the ground plane. A point straight above or
    /// below leaves the yaw untouched.
    pub fn face_towards(&mut self, point: Vec3) {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        if dx != 0.0 || dz != 0.0 {
            self.yaw = dx.atan2(dz);
        }
    }

    pub fn distance_to(&self, other: &Pose) -> f32 {
        self.position.distance(other.position)
    }

    /// Unit vector the pose is facing along, in the XZ plane.
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        Vec3::new(sin, 0.0, cos)
    }
}

/// What a static scene piece represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    BoundaryWall,
    Tower,
    TowerRoof,
    CastleWall,
    GatePillar,
    GateArch,
    Door,
    Keep,
    TreeTrunk,
    TreeCanopy,
}

/// A static scene piece in world space.
///
/// Only bodies tagged `collidable` take part in collision queries; the rest
/// are decoration a renderer may still draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticBody {
    pub kind: BodyKind,
    pub bounds: Aabb,
    pub collidable: bool,
}

impl StaticBody {
    pub fn solid(kind: BodyKind, bounds: Aabb) -> Self {
        Self {
            kind,
            bounds,
            collidable: true,
        }
    }

    pub fn decoration(kind: BodyKind, bounds: Aabb) -> Self {
        Self {
            kind,
            bounds,
            collidable: false,
        }
    }
}
