use chase_common::Pose;
use chase_input::KeyState;
use glam::Vec3;

use crate::{ChaseConfig, CollisionIndex};

/// Result of one frame of player movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerMove {
    /// No directional key held.
    Idle,
    /// Candidate was clear and has been committed.
    Moved { from: Vec3, to: Vec3 },
    /// Candidate was blocked; position is unchanged.
    Blocked { candidate: Vec3 },
}

/// Apply one frame of keyboard movement to the player.
///
/// Facing follows the keys even when the move is rejected.
pub fn step_player(
    pose: &mut Pose,
    keys: &KeyState,
    index: &CollisionIndex,
    config: &ChaseConfig,
) -> PlayerMove {
    if !keys.any() {
        return PlayerMove::Idle;
    }

    pose.yaw = keys.facing(pose.yaw);
    let from = pose.position;
    let candidate = from + keys.displacement(config.player_step);

    if index.is_blocked(candidate, config.player_half_extent) {
        tracing::trace!(%candidate, "player blocked");
        return PlayerMove::Blocked { candidate };
    }
    pose.position = candidate;
    PlayerMove::Moved {
        from,
        to: candidate,
    }
}
