use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`ChaseConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tuning for one session. Distances are world units, durations are frames.
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    /// Player displacement per held key per frame.
    pub player_step: f32,
    /// Horizontal half-extent of the player's collision probe.
    pub player_half_extent: f32,
    /// Enemy base speed per frame.
    pub enemy_speed: f32,
    /// Speed factor while the turbo countdown runs.
    pub turbo_multiplier: f32,
    /// Horizontal half-extent of the enemy's collision probe.
    pub enemy_half_extent: f32,
    /// Frames spent walking the escape direction after getting stuck.
    pub unstick_frames: u32,
    /// Frames of turbo granted on every stuck.
    pub turbo_frames: u32,
    /// The round ends when the actors are closer than this.
    pub catch_distance: f32,
    /// Seed for the layout and the escape-direction generator.
    pub seed: u64,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            player_step: 0.2,
            player_half_extent: 0.6,
            enemy_speed: 0.1,
            turbo_multiplier: 2.5,
            enemy_half_extent: 0.8,
            unstick_frames: 20,
            turbo_frames: 180,
            catch_distance: 1.5,
            seed: 0,
        }
    }
}

impl ChaseConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_step", self.player_step),
            ("player_half_extent", self.player_half_extent),
            ("enemy_speed", self.enemy_speed),
            ("enemy_half_extent", self.enemy_half_extent),
            ("catch_distance", self.catch_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.turbo_multiplier.is_finite() && self.turbo_multiplier >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "turbo_multiplier must be at least 1, got {}",
                self.turbo_multiplier
            )));
        }
        Ok(())
    }

    pub fn turbo_speed(&self) -> f32 {
        self.enemy_speed * self.turbo_multiplier
    }
}
