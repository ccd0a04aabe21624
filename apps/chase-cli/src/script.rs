//! Scripted key input for headless runs.
//!
//! A script is a comma-separated list of `keys:frames` segments, where keys
//! are `up`, `down`, `left`, `right` joined with `+`, or `idle`:
//!
//! ```text
//! up:60,down+right:40,idle:10
//! ```

use chase_input::{Direction, KeyState};
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScriptError {
    #[error("segment {0:?} is missing ':frames'")]
    MissingFrames(String),
    #[error("bad frame count in {0:?}")]
    BadFrames(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub keys: KeyState,
    pub frames: u32,
}

/// Key segments played in order and repeated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    segments: Vec<Segment>,
    period: u64,
}

impl Script {
    #[cfg(test)]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Keys held on zero-based `frame`. An empty script holds nothing.
    pub fn keys_at(&self, frame: u64) -> KeyState {
        if self.period == 0 {
            return KeyState::new();
        }
        let mut t = frame % self.period;
        for seg in &self.segments {
            if t < u64::from(seg.frames) {
                return seg.keys;
            }
            t -= u64::from(seg.frames);
        }
        KeyState::new()
    }
}

fn parse_key(name: &str) -> Result<Option<Direction>, ScriptError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "idle" => Ok(None),
        "up" => Ok(Some(Direction::Up)),
        "down" => Ok(Some(Direction::Down)),
        "left" => Ok(Some(Direction::Left)),
        "right" => Ok(Some(Direction::Right)),
        other => Err(ScriptError::UnknownKey(other.to_string())),
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        for raw in s.split(',').map(str::trim).filter(|r| !r.is_empty()) {
            let (keys, frames) = raw
                .split_once(':')
                .ok_or_else(|| ScriptError::MissingFrames(raw.to_string()))?;
            let frames: u32 = frames
                .trim()
                .parse()
                .map_err(|_| ScriptError::BadFrames(raw.to_string()))?;
            let mut state = KeyState::new();
            for name in keys.split('+') {
                if let Some(dir) = parse_key(name)? {
                    state.set(dir, true);
                }
            }
            segments.push(Segment {
                keys: state,
                frames,
            });
        }
        let period = segments.iter().map(|s| u64::from(s.frames)).sum();
        Ok(Self { segments, period })
    }
}
