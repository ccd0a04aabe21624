//! Scene Layout: the castle grounds as static bodies in world space.
//!
//! # Invariants
//! - Layout is a pure function of its seed.
//! - Bodies are produced once and never move afterwards.

mod castle;
mod forest;

use chase_common::{BodyKind, StaticBody};
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use forest::{ForestConfig, PATH_HALF_WIDTH};

/// Where the player starts: on the path in front of the gate.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 0.0, 14.0);
/// Where the enemy starts: outside the south-east tower, clear of it by
/// more than the enemy's half-extent.
pub const ENEMY_SPAWN: Vec3 = Vec3::new(10.5, 0.0, 10.5);

/// Static bodies of the castle grounds plus actor spawn points.
#[derive(Debug, Clone)]
pub struct CastleLayout {
    bodies: Vec<StaticBody>,
    player_spawn: Vec3,
    enemy_spawn: Vec3,
}

impl CastleLayout {
    /// Full castle with the default forest around it.
    pub fn generate(seed: u64) -> Self {
        Self::with_forest(seed, &ForestConfig::default())
    }

    pub fn with_forest(seed: u64, forest: &ForestConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bodies = Vec::new();
        castle::boundary_walls(&mut bodies);
        forest::plant(&mut bodies, forest, &mut rng);
        castle::castle(&mut bodies);

        tracing::debug!(
            seed,
            bodies = bodies.len(),
            collidable = bodies.iter().filter(|b| b.collidable).count(),
            "castle layout generated"
        );

        Self {
            bodies,
            player_spawn: PLAYER_SPAWN,
            enemy_spawn: ENEMY_SPAWN,
        }
    }

    /// All bodies, collidable or not.
    pub fn bodies(&self) -> &[StaticBody] {
        &self.bodies
    }

    /// Bodies tagged for collision.
    pub fn collidable(&self) -> impl Iterator<Item = &StaticBody> {
        self.bodies.iter().filter(|b| b.collidable)
    }

    pub fn count(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }

    pub fn player_spawn(&self) -> Vec3 {
        self.player_spawn
    }

    pub fn enemy_spawn(&self) -> Vec3 {
        self.enemy_spawn
    }
}

pub fn crate_info() -> &'static str {
    "chase-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }

    #[test]
    fn layout_has_every_piece() {
        let layout = CastleLayout::generate(1);
        assert_eq!(layout.count(BodyKind::BoundaryWall), 4);
        assert_eq!(layout.count(BodyKind::Tower), 4);
        assert_eq!(layout.count(BodyKind::TowerRoof), 4);
        assert_eq!(layout.count(BodyKind::CastleWall), 5);
        assert_eq!(layout.count(BodyKind::GatePillar), 2);
        assert_eq!(layout.count(BodyKind::GateArch), 1);
        assert_eq!(layout.count(BodyKind::Door), 1);
        assert_eq!(layout.count(BodyKind::Keep), 1);
        assert_eq!(layout.count(BodyKind::TreeTrunk), 100);
        assert_eq!(layout.count(BodyKind::TreeCanopy), 100);
    }

    #[test]
    fn only_solid_pieces_are_collidable() {
        let layout = CastleLayout::generate(3);
        for body in layout.collidable() {
            assert!(!matches!(
                body.kind,
                BodyKind::TowerRoof | BodyKind::GateArch | BodyKind::Door | BodyKind::TreeCanopy
            ));
        }
        // 4 boundary + 4 towers + 5 walls + 2 pillars + keep + 100 trunks
        assert_eq!(layout.collidable().count(), 116);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = CastleLayout::generate(42);
        let b = CastleLayout::generate(42);
        assert_eq!(a.bodies(), b.bodies());
    }

    #[test]
    fn different_seeds_move_trees() {
        let a = CastleLayout::generate(1);
        let b = CastleLayout::generate(2);
        assert_ne!(a.bodies(), b.bodies());
    }
}
