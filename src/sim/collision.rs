//! Collision detection between the actor and obstacles
//!
//! Plain axis-aligned boxes: the actor hits an obstacle when the two
//! horizontal spans overlap and the actor is not fully inside the gap.

use super::state::{Actor, Obstacle};

/// Whether the actor's horizontal span overlaps the obstacle's
#[inline]
pub fn overlaps_x(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.pos.x < obstacle.right() && actor.right() > obstacle.x
}

/// Whether the actor pokes out of the obstacle's gap (ignores x)
#[inline]
pub fn outside_gap(actor: &Actor, obstacle: &Obstacle, screen_height: f32) -> bool {
    actor.pos.y < obstacle.top || actor.bottom() > obstacle.gap_bottom(screen_height)
}

/// Check one obstacle
pub fn hits(actor: &Actor, obstacle: &Obstacle, screen_height: f32) -> bool {
    overlaps_x(actor, obstacle) && outside_gap(actor, obstacle, screen_height)
}

/// Check every obstacle, stopping at the first hit.
///
/// More than one obstacle can straddle the actor when spacing is tight,
/// so the whole sequence is scanned rather than just the nearest.
pub fn collides<'a, I>(actor: &Actor, obstacles: I, screen_height: f32) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles
        .into_iter()
        .any(|obstacle| hits(actor, obstacle, screen_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;

    const H: f32 = 400.0;

    fn actor_at(y: f32) -> Actor {
        let mut actor = Actor::new(&GameConfig::default());
        actor.pos.y = y;
        actor
    }

    fn obstacle(x: f32, top: f32, bottom: f32) -> Obstacle {
        Obstacle {
            x,
            top,
            bottom,
            width: 30.0,
        }
    }

    #[test]
    fn test_bottom_edge_exits_gap() {
        // Actor spans x 50..90, y 150..190; gap is y 100..150
        let actor = actor_at(150.0);
        let o = obstacle(40.0, 100.0, 250.0);
        assert!(overlaps_x(&actor, &o));
        assert!(collides(&actor, [&o], H));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Gap y 100..300, actor y 150..190
        let actor = actor_at(150.0);
        let o = obstacle(40.0, 100.0, 100.0);
        assert!(!collides(&actor, [&o], H));
    }

    #[test]
    fn test_top_edge_exits_gap() {
        let actor = actor_at(90.0);
        let o = obstacle(60.0, 100.0, 100.0);
        assert!(collides(&actor, [&o], H));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Obstacle ends exactly where actor starts
        let actor = actor_at(0.0);
        let o = obstacle(20.0, 300.0, 0.0);
        assert!(!overlaps_x(&actor, &o));
        assert!(!collides(&actor, [&o], H));

        // Obstacle starts exactly where actor ends
        let o = obstacle(90.0, 300.0, 0.0);
        assert!(!collides(&actor, [&o], H));

        // Actor flush with gap edges
        let actor = actor_at(100.0);
        let o = obstacle(60.0, 100.0, 260.0);
        assert!(!collides(&actor, [&o], H));
    }

    #[test]
    fn test_no_horizontal_overlap_no_collision() {
        let actor = actor_at(0.0);
        let o = obstacle(200.0, 300.0, 50.0);
        assert!(!collides(&actor, [&o], H));
    }

    #[test]
    fn test_any_overlapping_obstacle_counts() {
        let actor = actor_at(150.0);
        // First overlaps with a safe gap, second overlaps and hits
        let safe = obstacle(30.0, 100.0, 100.0);
        let deadly = obstacle(70.0, 170.0, 100.0);
        assert!(collides(&actor, [&safe, &deadly], H));
        assert!(!collides(&actor, [&safe], H));
    }

    #[test]
    fn test_empty_sequence() {
        let actor = actor_at(0.0);
        assert!(!collides(&actor, std::iter::empty::<&Obstacle>(), H));
    }
}
