use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// One of the four directional inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a raw key code to a direction. Anything outside the arrow keys is
    /// filtered out.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }

    /// Unit step on the ground plane. Up walks toward -Z.
    pub fn axis(self) -> Vec3 {
        match self {
            Self::Up => Vec3::NEG_Z,
            Self::Down => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
        }
    }

    /// Yaw when this key alone decides the facing.
    pub fn yaw(self) -> f32 {
        match self {
            Self::Up => PI,
            Self::Down => 0.0,
            Self::Left => -FRAC_PI_2,
            Self::Right => FRAC_PI_2,
        }
    }
}

/// A filtered key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Direction),
    Released(Direction),
}

impl KeyEvent {
    /// Build an event from a raw key code, or `None` for keys we ignore.
    pub fn from_raw(code: &str, pressed: bool) -> Option<Self> {
        let dir = Direction::from_code(code)?;
        Some(if pressed {
            Self::Pressed(dir)
        } else {
            Self::Released(dir)
        })
    }
}

/// Which directional keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with exactly the given keys held.
    pub fn holding(dirs: &[Direction]) -> Self {
        let mut keys = Self::default();
        for &d in dirs {
            keys.set(d, true);
        }
        keys
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(d) => self.set(d, true),
            KeyEvent::Released(d) => self.set(d, false),
        }
    }

    /// Feed a raw key transition. Returns whether the code was recognised.
    pub fn handle_raw(&mut self, code: &str, pressed: bool) -> bool {
        match KeyEvent::from_raw(code, pressed) {
            Some(event) => {
                self.apply(event);
                true
            }
            None => {
                tracing::trace!(code, "ignoring key");
                false
            }
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_held(*d))
    }

    /// Sum of `step` along each held key's axis. Opposite keys cancel.
    pub fn displacement(&self, step: f32) -> Vec3 {
        self.held().map(|d| d.axis() * step).sum()
    }

    /// Facing for this frame, or `current` when nothing is held.
    ///
    /// Single keys are applied in Up, Down, Left, Right order so the later
    /// one wins; a held diagonal pair then overrides them.
    pub fn facing(&self, current: f32) -> f32 {
        let mut yaw = current;
        for d in self.held() {
            yaw = d.yaw();
        }
        if self.up && self.left {
            yaw = -3.0 * FRAC_PI_4;
        }
        if self.up && self.right {
            yaw = 3.0 * FRAC_PI_4;
        }
        if self.down && self.left {
            yaw = -FRAC_PI_4;
        }
        if self.down && self.right {
            yaw = FRAC_PI_4;
        }
        yaw
    }
}
