//! Idle/demo mode - the game plays itself
//!
//! Aims for the lower edge of the next gap: whenever the actor's bottom sinks
//! past that line (less a margin) it flaps. Used by the headless native
//! runner.

use super::state::{GameState, Obstacle};
use crate::settings::GameConfig;

/// Clearance kept above the bottom barrier
pub const FLAP_MARGIN: f32 = 10.0;

/// The first obstacle the actor has not yet fully passed
pub fn next_obstacle(state: &GameState) -> Option<&Obstacle> {
    state
        .obstacles
        .iter()
        .find(|o| o.right() > state.actor.pos.x)
}

/// Decide whether to flap this tick
pub fn should_flap(state: &GameState, config: &GameConfig) -> bool {
    if !state.is_running() {
        return false;
    }

    // With nothing ahead, hover around the middle of the screen
    let target = next_obstacle(state)
        .map(|o| o.gap_bottom(config.screen_height))
        .unwrap_or((config.screen_height + config.pipe_gap) / 2.0);

    state.actor.bottom() > target - FLAP_MARGIN
}
