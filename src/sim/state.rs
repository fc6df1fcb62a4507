//! Game state and core simulation types
//!
//! Everything one game instance mutates lives here, owned by the loop
//! controller. There is no global state; run two games, own two states.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::GameConfig;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks are being simulated
    Running,
    /// Collided; waits for a restart
    GameOver,
}

/// The player-controlled falling sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Top-left corner. `x` never changes after creation.
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
    pub gravity: f32,
    /// Velocity set by a flap (negative)
    pub lift: f32,
    /// Set on collision, drives the terminal visual
    pub destroyed: bool,
}

impl Actor {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.actor_x, config.actor_start_y),
            size: Vec2::new(config.actor_width, config.actor_height),
            velocity: 0.0,
            gravity: config.gravity,
            lift: config.lift,
            destroyed: false,
        }
    }

    /// Back to the start position, at rest, alive
    pub fn reset(&mut self, config: &GameConfig) {
        self.pos.y = config.actor_start_y;
        self.velocity = 0.0;
        self.destroyed = false;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A top/bottom barrier pair with a vertical gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge, decreases every tick
    pub x: f32,
    /// Height of the top barrier (gap starts here)
    pub top: f32,
    /// Height of the bottom barrier
    pub bottom: f32,
    pub width: f32,
}

impl Obstacle {
    /// Build an obstacle from a chosen top height; bottom takes the rest
    pub fn with_top(x: f32, top: f32, config: &GameConfig) -> Self {
        Self {
            x,
            top,
            bottom: config.screen_height - top - config.pipe_gap,
            width: config.pipe_width,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate where the bottom barrier begins
    #[inline]
    pub fn gap_bottom(&self, screen_height: f32) -> f32 {
        screen_height - self.bottom
    }
}

/// Current and best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32,
    /// Best across restarts, never decreases
    pub best: u32,
}

impl Score {
    /// Count one passed obstacle. Returns true when this set a new best.
    pub fn increment(&mut self) -> bool {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }

    /// New round; best is kept
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}

/// Complete state of one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    /// Simulation tick counter (resets on restart)
    pub tick: u64,
    pub score: Score,
    pub phase: GamePhase,
    pub actor: Actor,
    /// Oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    /// Gap placement RNG
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            tick: 0,
            score: Score::default(),
            phase: GamePhase::Running,
            actor: Actor::new(config),
            obstacles: VecDeque::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a new round. The best score and RNG stream carry over.
    pub fn restart(&mut self, config: &GameConfig) {
        self.tick = 0;
        self.score.reset_current();
        self.phase = GamePhase::Running;
        self.actor.reset(config);
        self.obstacles.clear();
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
