//! End-to-end frame scenarios for the chase session.

use chase_common::Aabb;
use chase_input::{Direction, KeyState};
use chase_kernel::{
    ChaseConfig, ChaseMode, CollisionIndex, ModeKind, Mood, Session, SessionEvent, StepOutcome,
};
use glam::Vec3;

/// Long wall with its west face at x = 1.0.
fn wall() -> Aabb {
    Aabb::new(Vec3::new(1.0, 0.0, -50.0), Vec3::new(2.0, 3.0, 50.0))
}

/// Enemy pressed against the wall, player on the far side.
fn walled_session(seed: u64) -> Session {
    let config = ChaseConfig {
        seed,
        ..ChaseConfig::default()
    };
    Session::new(
        config,
        CollisionIndex::new(vec![wall()]),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(0.15, 0.0, 0.0),
    )
}

fn nudge() -> KeyState {
    KeyState::holding(&[Direction::Down])
}

#[test]
fn adjacent_obstacle_forces_unstick_on_first_frame() {
    let mut s = walled_session(1);
    assert_eq!(s.step(&nudge()), StepOutcome::Running);

    let chaser = s.enemy().chaser;
    assert!(matches!(chaser.mode(), ChaseMode::Unstick { timer: 20, .. }));
    assert_eq!(chaser.unstick_timer(), 20);
    assert_eq!(chaser.turbo_timer(), 180);
    assert_eq!(s.enemy().pose.position, Vec3::new(0.15, 0.0, 0.0));
    assert!(s.events().iter().any(|e| matches!(
        e,
        SessionEvent::ModeChanged {
            from: ModeKind::Chase,
            to: ModeKind::Unstick,
            turbo_timer: 180,
            ..
        }
    )));
}

#[test]
fn unstick_counts_down_one_per_frame_then_chases() {
    for seed in 0..8 {
        let mut s = walled_session(seed);
        s.step(&nudge());
        assert_eq!(s.enemy().chaser.unstick_timer(), 20);

        for frame in 1..20u32 {
            s.step(&KeyState::new());
            let chaser = s.enemy().chaser;
            assert_eq!(chaser.unstick_timer(), 20 - frame, "seed {seed} frame {frame}");
            assert_eq!(chaser.turbo_timer(), 180 - frame);
            assert_eq!(s.enemy().mood, Mood::Angry);
        }

        s.step(&KeyState::new());
        let chaser = s.enemy().chaser;
        assert_eq!(chaser.mode(), ChaseMode::Chase, "seed {seed}");
        // The return to chase leaves turbo running.
        assert_eq!(chaser.turbo_timer(), 160);
    }
}

#[test]
fn mood_tracks_turbo_countdown() {
    let config = ChaseConfig {
        turbo_frames: 1,
        unstick_frames: 2,
        ..ChaseConfig::default()
    };
    let mut s = Session::new(
        config,
        CollisionIndex::new(vec![wall()]),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(0.15, 0.0, 0.0),
    );
    s.step(&nudge());
    let (mut angry, mut normal) = (0, 0);
    for _ in 0..300 {
        let turbo_before = s.enemy().chaser.turbo_timer();
        let before = s.enemy().pose.position;
        if let StepOutcome::Caught { .. } = s.step(&KeyState::new()) {
            break;
        }
        let travelled = s.enemy().pose.position.distance(before);
        if turbo_before > 0 {
            assert_eq!(s.enemy().mood, Mood::Angry);
            assert!(travelled < 1e-6 || (travelled - 0.25).abs() < 1e-4);
            angry += 1;
        } else {
            assert_eq!(s.enemy().mood, Mood::Normal);
            assert!(travelled < 1e-6 || (travelled - 0.1).abs() < 1e-4);
            normal += 1;
        }
    }
    assert!(angry > 0 && normal > 0);
}

#[test]
fn collision_index_is_unchanged_by_play() {
    let mut s = Session::castle(ChaseConfig::default());
    let before = s.index().boxes().to_vec();
    let keys = [
        KeyState::holding(&[Direction::Up]),
        KeyState::holding(&[Direction::Left, Direction::Up]),
        KeyState::new(),
        KeyState::holding(&[Direction::Right]),
    ];
    for frame in 0..2_000 {
        s.step(&keys[(frame / 50) % keys.len()]);
        assert_eq!(s.index().len(), before.len());
    }
    assert_eq!(s.index().boxes(), &before[..]);
}

#[test]
fn player_move_commits_iff_unblocked() {
    let mut s = Session::castle(ChaseConfig::default());
    let config = s.config().clone();
    let keys = KeyState::holding(&[Direction::Up]);
    // Walk north up the path into the gatehouse and keep.
    for _ in 0..200 {
        let before = s.player().position;
        let candidate = before + keys.displacement(config.player_step);
        let blocked = s.index().is_blocked(candidate, config.player_half_extent);
        if let StepOutcome::Caught { .. } = s.step(&keys) {
            break;
        }
        if blocked {
            assert_eq!(s.player().position, before);
        } else {
            assert_eq!(s.player().position, candidate);
        }
    }
}

#[test]
fn catch_fires_once_per_crossing() {
    let mut s = Session::new(
        ChaseConfig::default(),
        CollisionIndex::default(),
        Vec3::ZERO,
        Vec3::new(3.0, 0.0, 0.0),
    );
    let mut catches = 0;
    let mut first = true;
    for _ in 0..500 {
        let keys = if first { nudge() } else { KeyState::new() };
        first = false;
        if let StepOutcome::Caught { distance } = s.step(&keys) {
            assert!(distance < 1.5);
            catches += 1;
        }
    }
    assert_eq!(catches, 1);
    assert_eq!(s.round(), 1);
    assert!(!s.started());
    assert_eq!(s.player().position, Vec3::ZERO);
    assert_eq!(s.enemy().pose.position, Vec3::new(3.0, 0.0, 0.0));

    let caught: Vec<_> = s
        .events()
        .iter()
        .filter(|e| matches!(e, SessionEvent::Caught { .. }))
        .collect();
    assert_eq!(caught.len(), 1);
    assert!(matches!(s.events().last(), Some(SessionEvent::Reset { round: 1, .. })));
}

#[test]
fn dormant_enemy_never_catches_a_still_player() {
    // Close enough to catch, but the player never moves.
    let mut s = Session::new(
        ChaseConfig::default(),
        CollisionIndex::default(),
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
    );
    for _ in 0..100 {
        assert_eq!(s.step(&KeyState::new()), StepOutcome::Dormant);
    }
    assert_eq!(s.round(), 0);
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut s = Session::castle(ChaseConfig {
            seed,
            ..ChaseConfig::default()
        });
        let keys = KeyState::holding(&[Direction::Right, Direction::Up]);
        for _ in 0..600 {
            s.step(&keys);
        }
        (s.player().position, s.enemy().pose.position, s.round(), s.events().to_vec())
    };
    assert_eq!(run(11), run(11));
}
