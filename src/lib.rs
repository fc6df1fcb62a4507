//! Flappy - flap through the gaps
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `game`: Loop controller (RUNNING / GAME_OVER, input actions, frame scheduling)
//! - `renderer`: Drawing surface abstraction and frame layout
//! - `input`: Key code to action mapping
//! - `settings`: Validated game configuration

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, Scheduler};
pub use input::{InputAction, KeyBindings};
pub use settings::{ConfigError, DeathStyle, GameConfig};

/// Default tuning, matching the classic browser version
pub mod consts {
    /// Screen dimensions (canvas pixels)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Actor start position and size
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_START_Y: f32 = 150.0;
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Velocity set by a flap (negative = up)
    pub const LIFT: f32 = -7.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 30.0;
    pub const PIPE_GAP: f32 = 200.0;
    /// Horizontal scroll per tick
    pub const PIPE_SPEED: f32 = 1.5;
    /// Ticks between obstacle spawns
    pub const SPAWN_INTERVAL: u64 = 120;

    /// Explosion sprite size relative to the actor
    pub const EXPLOSION_SCALE: f32 = 1.5;
}
