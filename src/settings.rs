//! Game configuration
//!
//! Every tunable lives in [`GameConfig`]. Defaults mirror [`crate::consts`];
//! overrides can be loaded from JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// JSON did not match the config schema
    Parse(serde_json::Error),
    /// A value breaks a simulation invariant
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Simulation and presentation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Surface ===
    pub surface_width: f32,
    pub surface_height: f32,

    // === Basket ===
    pub basket_width: f32,
    pub basket_height: f32,
    /// Pixels per frame while a direction key is held
    pub basket_speed: f32,
    pub basket_bottom_margin: f32,

    // === Objects ===
    pub object_radius: f32,
    /// Pixels per frame
    pub gravity: f32,
    pub dangerous_probability: f64,
    pub spawn_interval_ms: f64,

    // === Rules ===
    pub max_missed_balls: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            basket_width: BASKET_WIDTH,
            basket_height: BASKET_HEIGHT,
            basket_speed: BASKET_SPEED,
            basket_bottom_margin: BASKET_BOTTOM_MARGIN,

            object_radius: OBJECT_RADIUS,
            gravity: GRAVITY,
            dangerous_probability: DANGEROUS_PROBABILITY,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            max_missed_balls: MAX_MISSED_BALLS,
        }
    }
}

impl GameConfig {
    /// Environment variable naming an optional JSON config file (native only)
    pub const ENV_VAR: &'static str = "BASKET_CATCH_CONFIG";

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from `BASKET_CATCH_CONFIG` if set, otherwise defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Check the geometric invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.surface_width > 0.0 && self.surface_height > 0.0) {
            return Err(invalid("surface_width", "surface must have positive size"));
        }
        if !(self.basket_width > 0.0 && self.basket_width < self.surface_width) {
            return Err(invalid(
                "basket_width",
                format!("must be in (0, {})", self.surface_width),
            ));
        }
        if self.basket_height <= 0.0 {
            return Err(invalid("basket_height", "must be positive"));
        }
        if self.basket_speed < 0.0 {
            return Err(invalid("basket_speed", "must not be negative"));
        }
        if !(self.object_radius > 0.0 && self.object_radius * 2.0 <= self.surface_width) {
            return Err(invalid(
                "object_radius",
                "must be positive and fit across the surface",
            ));
        }
        if self.gravity <= 0.0 {
            return Err(invalid("gravity", "objects must fall"));
        }
        if !(0.0..=1.0).contains(&self.dangerous_probability) {
            return Err(invalid("dangerous_probability", "must be in [0, 1]"));
        }
        if self.spawn_interval_ms <= 0.0 {
            return Err(invalid("spawn_interval_ms", "must be positive"));
        }
        if self.max_missed_balls == 0 {
            return Err(invalid("max_missed_balls", "must be at least 1"));
        }
        Ok(())
    }

    /// Basket top-left corner at the start of a run
    pub fn basket_start(&self) -> (f32, f32) {
        (
            self.surface_width / 2.0 - self.basket_width / 2.0,
            self.surface_height - self.basket_height - self.basket_bottom_margin,
        )
    }
}
