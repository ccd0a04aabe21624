//! Enemy chase/unstick state machine.
//!
//! The enemy walks straight at its target. When that move is blocked it
//! switches to `Unstick`, walks a random escape direction for a few frames
//! and gets a turbo countdown that outlives the unstick phase.

use chase_common::Pose;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::{ChaseConfig, CollisionIndex};

/// Behavior mode of the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChaseMode {
    /// Walk straight toward the target.
    Chase,
    /// Walk `direction` until `timer` runs out.
    Unstick { timer: u32, direction: Vec3 },
}

/// Mode without its payload, for events and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    Chase,
    Unstick,
}

impl ChaseMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Chase => ModeKind::Chase,
            Self::Unstick { .. } => ModeKind::Unstick,
        }
    }
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chase => write!(f, "CHASE"),
            Self::Unstick => write!(f, "UNSTICK"),
        }
    }
}

/// Visual state of the enemy, driven by the turbo countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Normal,
    Angry,
}

/// Mode after one attempted move.
///
/// `escape` is only called when a fresh escape direction is needed: on
/// entering `Unstick`, and on every blocked move while unsticking. Turbo is
/// not handled here.
pub fn next_mode(
    mode: ChaseMode,
    blocked: bool,
    unstick_frames: u32,
    mut escape: impl FnMut() -> Vec3,
) -> ChaseMode {
    match mode {
        ChaseMode::Chase if !blocked => ChaseMode::Chase,
        ChaseMode::Chase => ChaseMode::Unstick {
            timer: unstick_frames,
            direction: escape(),
        },
        ChaseMode::Unstick { timer, direction } => {
            let direction = if blocked { escape() } else { direction };
            let timer = timer.saturating_sub(1);
            if timer == 0 {
                ChaseMode::Chase
            } else {
                ChaseMode::Unstick { timer, direction }
            }
        }
    }
}

/// Uniformly random unit vector on the ground plane.
pub fn escape_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    Vec3::new(angle.cos(), 0.0, angle.sin())
}

/// What happened during one enemy frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseStep {
    pub mood: Mood,
    pub speed: f32,
    pub moved: bool,
    pub from: ModeKind,
    pub to: ModeKind,
}

impl ChaseStep {
    pub fn transitioned(&self) -> bool {
        self.from != self.to
    }
}

/// Chase state owned by the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chaser {
    mode: ChaseMode,
    turbo_timer: u32,
}

impl Default for Chaser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chaser {
    pub fn new() -> Self {
        Self {
            mode: ChaseMode::Chase,
            turbo_timer: 0,
        }
    }

    pub fn mode(&self) -> ChaseMode {
        self.mode
    }

    pub fn turbo_timer(&self) -> u32 {
        self.turbo_timer
    }

    /// Remaining unstick frames, 0 while chasing.
    pub fn unstick_timer(&self) -> u32 {
        match self.mode {
            ChaseMode::Chase => 0,
            ChaseMode::Unstick { timer, .. } => timer,
        }
    }

    /// Mood the next frame will run with.
    pub fn mood(&self) -> Mood {
        if self.turbo_timer > 0 {
            Mood::Angry
        } else {
            Mood::Normal
        }
    }

    /// Burn one turbo frame if any is left and return this frame's speed.
    fn begin_frame(&mut self, config: &ChaseConfig) -> (f32, Mood) {
        let mood = self.mood();
        if self.turbo_timer > 0 {
            self.turbo_timer -= 1;
            (config.turbo_speed(), mood)
        } else {
            (config.enemy_speed, mood)
        }
    }

    /// Run one frame: attempt a move, commit it if clear, then advance the
    /// state machine on the collision outcome.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        pose: &mut Pose,
        target: Vec3,
        index: &CollisionIndex,
        config: &ChaseConfig,
        rng: &mut R,
    ) -> ChaseStep {
        let (speed, mood) = self.begin_frame(config);
        let from = self.mode.kind();

        let heading = match self.mode {
            ChaseMode::Chase => (target - pose.position).normalize_or_zero(),
            ChaseMode::Unstick { direction, .. } => direction,
        };
        let candidate = pose.position + heading * speed;
        let blocked = index.is_blocked(candidate, config.enemy_half_extent);

        if !blocked {
            match self.mode {
                ChaseMode::Chase => {
                    pose.position = candidate;
                    pose.face_towards(target);
                }
                ChaseMode::Unstick { .. } => {
                    pose.face_towards(candidate);
                    pose.position = candidate;
                }
            }
        } else {
            tracing::trace!(%candidate, mode = %from, "enemy blocked");
        }

        if blocked && from == ModeKind::Chase {
            // Refreshed on every stuck, even mid-countdown.
            self.turbo_timer = config.turbo_frames;
        }
        self.mode = next_mode(self.mode, blocked, config.unstick_frames, || {
            escape_direction(&mut *rng)
        });

        let to = self.mode.kind();
        if from != to {
            tracing::debug!(
                %from,
                %to,
                turbo = self.turbo_timer,
                unstick = self.unstick_timer(),
                "enemy mode changed"
            );
        }

        ChaseStep {
            mood,
            speed,
            moved: !blocked,
            from,
            to,
        }
    }
}
