//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use obstacles::ObstacleTick;
pub use physics::{flap, integrate};
pub use state::{Actor, GamePhase, GameState, Obstacle, Score};
pub use tick::{TickReport, tick};
