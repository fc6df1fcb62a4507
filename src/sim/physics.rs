//! Vertical physics for the actor
//!
//! Integration is per tick (no dt): gravity is in pixels/tick².

use super::state::Actor;

/// Advance velocity and position by one tick, clamped to the screen.
/// Touching the floor or ceiling stops the actor dead.
pub fn integrate(actor: &mut Actor, screen_height: f32) {
    actor.velocity += actor.gravity;
    actor.pos.y += actor.velocity;

    let floor = screen_height - actor.size.y;
    if actor.pos.y > floor {
        actor.pos.y = floor;
        actor.velocity = 0.0;
    }
    if actor.pos.y < 0.0 {
        actor.pos.y = 0.0;
        actor.velocity = 0.0;
    }
}

/// Replace the current velocity with the lift impulse.
/// A destroyed actor does not flap.
pub fn flap(actor: &mut Actor) {
    if actor.destroyed {
        return;
    }
    actor.velocity = actor.lift;
}
