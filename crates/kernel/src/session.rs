use chase_common::Pose;
use chase_input::KeyState;
use chase_scene::CastleLayout;
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::player::{self, PlayerMove};
use crate::{ChaseConfig, Chaser, CollisionIndex, ModeKind, Mood};

/// An event record produced by the session as it steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The player moved for the first time this round; the enemy wakes up.
    Awakened { tick: u64 },
    PlayerMoved { tick: u64, from: Vec3, to: Vec3 },
    PlayerBlocked { tick: u64, candidate: Vec3 },
    ModeChanged {
        tick: u64,
        from: ModeKind,
        to: ModeKind,
        turbo_timer: u32,
    },
    /// The enemy got within catch distance. Always followed by `Reset`.
    Caught { tick: u64, round: u32, distance: f32 },
    Reset { tick: u64, round: u32 },
}

/// What a call to [`Session::step`] amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The player has not moved yet; the enemy is asleep.
    Dormant,
    Running,
    /// The round ended and the session has been reset.
    Caught { distance: f32 },
}

/// The pursuing agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pose: Pose,
    pub chaser: Chaser,
    /// Mood of the most recent frame.
    pub mood: Mood,
}

impl Enemy {
    fn spawn(at: Vec3) -> Self {
        Self {
            pose: Pose::at(at),
            chaser: Chaser::new(),
            mood: Mood::Normal,
        }
    }
}

/// One play session: the static obstacles plus everything that moves.
///
/// All mutation goes through [`Session::step`] and [`Session::reset`]. The
/// escape directions come from a generator seeded from the config, so the
/// same seed and key sequence reproduce the same session.
#[derive(Debug, Clone)]
pub struct Session {
    config: ChaseConfig,
    index: CollisionIndex,
    player_spawn: Vec3,
    enemy_spawn: Vec3,
    player: Pose,
    enemy: Enemy,
    started: bool,
    tick: u64,
    round: u32,
    rng: StdRng,
    event_log: Vec<SessionEvent>,
}

impl Session {
    pub fn new(
        config: ChaseConfig,
        index: CollisionIndex,
        player_spawn: Vec3,
        enemy_spawn: Vec3,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            index,
            player_spawn,
            enemy_spawn,
            player: Pose::at(player_spawn),
            enemy: Enemy::spawn(enemy_spawn),
            started: false,
            tick: 0,
            round: 0,
            rng,
            event_log: Vec::new(),
        }
    }

    /// Session on the castle grounds generated from `config.seed`.
    pub fn castle(config: ChaseConfig) -> Self {
        let layout = CastleLayout::generate(config.seed);
        Self::from_layout(config, &layout)
    }

    pub fn from_layout(config: ChaseConfig, layout: &CastleLayout) -> Self {
        let index = CollisionIndex::from_bodies(layout.bodies());
        Self::new(config, index, layout.player_spawn(), layout.enemy_spawn())
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    pub fn index(&self) -> &CollisionIndex {
        &self.index
    }

    pub fn player(&self) -> &Pose {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Whether the player has moved this round.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Frames stepped since the session was created. Not cleared by resets.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of completed rounds.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn distance(&self) -> f32 {
        self.player.distance_to(&self.enemy.pose)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[SessionEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Advance one frame with the given held keys.
    pub fn step(&mut self, keys: &KeyState) -> StepOutcome {
        self.tick += 1;
        let tick = self.tick;
        let _span = tracing::info_span!("session_step", tick).entered();

        match player::step_player(&mut self.player, keys, &self.index, &self.config) {
            PlayerMove::Moved { from, to } => {
                self.event_log
                    .push(SessionEvent::PlayerMoved { tick, from, to });
                if !self.started {
                    self.started = true;
                    tracing::debug!(round = self.round, "enemy awakened");
                    self.event_log.push(SessionEvent::Awakened { tick });
                }
            }
            PlayerMove::Blocked { candidate } => {
                self.event_log
                    .push(SessionEvent::PlayerBlocked { tick, candidate });
            }
            PlayerMove::Idle => {}
        }

        if !self.started {
            return StepOutcome::Dormant;
        }

        let step = self.enemy.chaser.step(
            &mut self.enemy.pose,
            self.player.position,
            &self.index,
            &self.config,
            &mut self.rng,
        );
        self.enemy.mood = step.mood;
        if step.transitioned() {
            self.event_log.push(SessionEvent::ModeChanged {
                tick,
                from: step.from,
                to: step.to,
                turbo_timer: self.enemy.chaser.turbo_timer(),
            });
        }

        let distance = self.distance();
        if distance < self.config.catch_distance {
            tracing::debug!(round = self.round, distance, "player caught");
            self.event_log.push(SessionEvent::Caught {
                tick,
                round: self.round,
                distance,
            });
            self.reset();
            return StepOutcome::Caught { distance };
        }

        StepOutcome::Running
    }

    /// Put both actors back on their spawns and start a new round.
    ///
    /// The collision index and the escape-direction generator carry over.
    pub fn reset(&mut self) {
        self.player = Pose::at(self.player_spawn);
        self.enemy = Enemy::spawn(self.enemy_spawn);
        self.started = false;
        self.round += 1;
        tracing::debug!(round = self.round, "session reset");
        self.event_log.push(SessionEvent::Reset {
            tick: self.tick,
            round: self.round,
        });
    }
}
