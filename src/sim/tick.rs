//! Per-tick simulation step
//!
//! Order is fixed: physics, then obstacles, then collision. Rendering and
//! scheduling are the loop controller's job (see `game`).

use super::state::{GamePhase, GameState};
use super::{collision, obstacles, physics};
use crate::settings::GameConfig;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Whether a tick was actually simulated (false once the round is over)
    pub simulated: bool,
    pub spawned: bool,
    pub scored: bool,
    pub new_best: bool,
    /// The actor hit an obstacle and the round ended
    pub collided: bool,
}

/// Advance the game state by one tick. Does nothing after game over.
pub fn tick(state: &mut GameState, config: &GameConfig) -> TickReport {
    if state.phase == GamePhase::GameOver {
        return TickReport::default();
    }

    physics::integrate(&mut state.actor, config.screen_height);

    let obstacle_tick = obstacles::tick(
        &mut state.obstacles,
        &mut state.score,
        state.tick,
        config,
        &mut state.rng,
    );

    let collided = collision::collides(&state.actor, &state.obstacles, config.screen_height);
    if collided {
        state.phase = GamePhase::GameOver;
        state.actor.destroyed = true;
    }

    state.tick += 1;

    TickReport {
        simulated: true,
        spawned: obstacle_tick.spawned,
        scored: obstacle_tick.recycled,
        new_best: obstacle_tick.new_best,
        collided,
    }
}
