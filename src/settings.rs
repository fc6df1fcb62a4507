//! Game configuration
//!
//! Tuning values are validated once at load time so the simulation never
//! sees a configuration it cannot run (e.g. a gap taller than the screen).
//! On the web the JSON lives in LocalStorage; natively the defaults are used.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::KeyBindings;

/// How the actor is drawn once it has collided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeathStyle {
    /// Actor sprite stays as-is, only the overlay changes
    #[default]
    Plain,
    /// Actor is replaced by a scaled explosion sprite
    Exploded,
}

impl DeathStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathStyle::Plain => "Plain",
            DeathStyle::Exploded => "Exploded",
        }
    }
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// JSON could not be parsed
    Parse(String),
    /// A size, speed or scale that must be strictly positive was not
    NonPositive { field: &'static str, value: f32 },
    /// Gap leaves no room for a random split
    GapTooLarge { gap: f32, screen_height: f32 },
    /// Actor does not fit on screen at its start position
    ActorOffScreen,
    /// Flap must push upward
    LiftNotUpward { lift: f32 },
    /// Gravity must pull downward (or be zero)
    NegativeGravity { gravity: f32 },
    /// Obstacles would overlap or recycle more than once per tick
    SpawnIntervalTooShort { interval: u64, min: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid config json: {msg}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::GapTooLarge { gap, screen_height } => write!(
                f,
                "pipe gap {gap} leaves no room on a screen {screen_height} tall"
            ),
            Self::ActorOffScreen => write!(f, "actor does not fit on screen at its start position"),
            Self::LiftNotUpward { lift } => write!(f, "lift must be negative, got {lift}"),
            Self::NegativeGravity { gravity } => {
                write!(f, "gravity must not be negative, got {gravity}")
            }
            Self::SpawnIntervalTooShort { interval, min } => {
                write!(f, "spawn interval {interval} too short (need at least {min})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Full game tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Actor ===
    pub actor_x: f32,
    pub actor_start_y: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub gravity: f32,
    pub lift: f32,

    // === Obstacles ===
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub spawn_interval: u64,

    // === Presentation ===
    pub death_style: DeathStyle,
    /// Explosion sprite size relative to the actor (Exploded style only)
    pub explosion_scale: f32,
    pub actor_sprite: String,
    pub explosion_sprite: String,

    // === Input ===
    pub keys: KeyBindings,

    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            actor_x: ACTOR_X,
            actor_start_y: ACTOR_START_Y,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            gravity: GRAVITY,
            lift: LIFT,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_interval: SPAWN_INTERVAL,

            death_style: DeathStyle::Plain,
            explosion_scale: EXPLOSION_SCALE,
            actor_sprite: "bully.png".to_string(),
            explosion_sprite: "explosion.png".to_string(),

            keys: KeyBindings::default(),

            seed: None,
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_config";

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("explosion_scale", self.explosion_scale),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also catches NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Top is drawn from [0, height - gap), which must hold at least one integer
        if self.screen_height - self.pipe_gap < 1.0 {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                screen_height: self.screen_height,
            });
        }

        // Negated `>=` so a NaN position is rejected too
        if !(self.actor_x >= 0.0)
            || !(self.actor_start_y >= 0.0)
            || self.actor_x + self.actor_width > self.screen_width
            || self.actor_start_y + self.actor_height > self.screen_height
        {
            return Err(ConfigError::ActorOffScreen);
        }

        if !(self.lift < 0.0) {
            return Err(ConfigError::LiftNotUpward { lift: self.lift });
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::NegativeGravity {
                gravity: self.gravity,
            });
        }

        let min = self.min_spawn_interval();
        if self.spawn_interval < min {
            return Err(ConfigError::SpawnIntervalTooShort {
                interval: self.spawn_interval,
                min,
            });
        }

        Ok(())
    }

    /// Smallest spawn interval whose spacing exceeds both the pipe width and
    /// one tick of travel (so obstacles never overlap and at most one leaves
    /// the screen per tick)
    pub fn min_spawn_interval(&self) -> u64 {
        let spacing_needed = self.pipe_width.max(self.pipe_speed);
        // A tiny speed saturates the cast; never wrap past u64::MAX
        ((spacing_needed / self.pipe_speed).floor() as u64).saturating_add(1)
    }

    /// Width of the random range obstacles split their tops from
    pub fn gap_range(&self) -> u32 {
        (self.screen_height - self.pipe_gap).floor() as u32
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
