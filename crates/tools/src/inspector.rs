use chase_common::Pose;
use chase_kernel::{CollisionIndex, ModeKind, Mood, Session};
use serde::Serialize;

/// Session inspector for developer tooling.
pub struct SessionInspector;

impl SessionInspector {
    /// Produce a summary of the session state.
    pub fn summary(session: &Session) -> SessionSummary {
        let chaser = session.enemy().chaser;
        SessionSummary {
            tick: session.tick(),
            round: session.round(),
            started: session.started(),
            mode: chaser.mode().kind(),
            unstick_timer: chaser.unstick_timer(),
            turbo_timer: chaser.turbo_timer(),
            mood: session.enemy().mood,
            distance: session.distance(),
            pending_events: session.events().len(),
        }
    }

    pub fn player(session: &Session) -> ActorInfo {
        ActorInfo::from_pose("player", session.player())
    }

    pub fn enemy(session: &Session) -> ActorInfo {
        ActorInfo::from_pose("enemy", &session.enemy().pose)
    }

    pub fn index(index: &CollisionIndex) -> IndexSummary {
        let (min, max) = match index.bounds() {
            Some(b) => (b.min.to_array(), b.max.to_array()),
            None => ([0.0; 3], [0.0; 3]),
        };
        IndexSummary {
            boxes: index.len(),
            min,
            max,
        }
    }
}

/// Summary of session state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub tick: u64,
    pub round: u32,
    pub started: bool,
    pub mode: ModeKind,
    pub unstick_timer: u32,
    pub turbo_timer: u32,
    pub mood: Mood,
    pub distance: f32,
    pub pending_events: usize,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session: tick={} round={} started={} mode={} unstick={} turbo={} mood={:?} distance={:.2} pending_events={}",
            self.tick,
            self.round,
            self.started,
            self.mode,
            self.unstick_timer,
            self.turbo_timer,
            self.mood,
            self.distance,
            self.pending_events
        )
    }
}

/// Position and facing of one actor.
#[derive(Debug, Clone, Serialize)]
pub struct ActorInfo {
    pub name: &'static str,
    pub position: [f32; 3],
    pub yaw_degrees: f32,
}

impl ActorInfo {
    fn from_pose(name: &'static str, pose: &Pose) -> Self {
        Self {
            name,
            position: pose.position.to_array(),
            yaw_degrees: pose.yaw.to_degrees(),
        }
    }
}

impl std::fmt::Display for ActorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<6} pos=({:.2}, {:.2}, {:.2}) yaw={:.0}deg",
            self.name, self.position[0], self.position[1], self.position[2], self.yaw_degrees
        )
    }
}

/// Size and extent of a collision index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexSummary {
    pub boxes: usize,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl std::fmt::Display for IndexSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Collision index: boxes={} min=({:.1}, {:.1}, {:.1}) max=({:.1}, {:.1}, {:.1})",
            self.boxes, self.min[0], self.min[1], self.min[2], self.max[0], self.max[1], self.max[2],
        )
    }
}
