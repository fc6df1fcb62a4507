//! Obstacle spawning, scrolling and recycling
//!
//! Obstacles live in a queue ordered by spawn time. All of them scroll at the
//! same speed, so spawn order is also left-to-right order and only the front
//! ever needs checking for removal.

use std::collections::VecDeque;

use rand::Rng;

use super::state::{Obstacle, Score};
use crate::settings::GameConfig;

/// What happened to the obstacle queue this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleTick {
    /// A new obstacle entered at the right edge
    pub spawned: bool,
    /// The front obstacle left the screen and was scored
    pub recycled: bool,
    /// The recycle raised the best score
    pub new_best: bool,
}

/// Draw a top height uniformly from `[0, screen_height - gap)`
pub fn random_top<R: Rng>(rng: &mut R, config: &GameConfig) -> f32 {
    rng.random_range(0..config.gap_range()) as f32
}

/// Spawn, scroll, then recycle at most one obstacle
pub fn tick<R: Rng>(
    obstacles: &mut VecDeque<Obstacle>,
    score: &mut Score,
    tick_count: u64,
    config: &GameConfig,
    rng: &mut R,
) -> ObstacleTick {
    tick_with(obstacles, score, tick_count, config, || random_top(rng, config))
}

/// Same as [`tick`], with the top height of a spawned obstacle taken from
/// `draw_top` (only called on spawn ticks)
pub fn tick_with<F: FnMut() -> f32>(
    obstacles: &mut VecDeque<Obstacle>,
    score: &mut Score,
    tick_count: u64,
    config: &GameConfig,
    mut draw_top: F,
) -> ObstacleTick {
    let mut result = ObstacleTick::default();

    if tick_count % config.spawn_interval == 0 {
        let top = draw_top();
        let obstacle = Obstacle::with_top(config.screen_width, top, config);
        log::debug!(
            "Spawned obstacle at tick {}: top={} bottom={}",
            tick_count,
            obstacle.top,
            obstacle.bottom
        );
        obstacles.push_back(obstacle);
        result.spawned = true;
    }

    for obstacle in obstacles.iter_mut() {
        obstacle.x -= config.pipe_speed;
    }

    if obstacles.front().is_some_and(|o| o.right() < 0.0) {
        obstacles.pop_front();
        result.recycled = true;
        result.new_best = score.increment();
        log::debug!("Obstacle passed, score {}", score.current);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config() -> GameConfig {
        GameConfig {
            screen_width: 400.0,
            screen_height: 400.0,
            pipe_gap: 200.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_on_interval_only() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obstacles = VecDeque::new();
        let mut score = Score::default();

        let r = tick(&mut obstacles, &mut score, 0, &config, &mut rng);
        assert!(r.spawned);
        assert_eq!(obstacles.len(), 1);

        for t in 1..120 {
            let r = tick(&mut obstacles, &mut score, t, &config, &mut rng);
            assert!(!r.spawned);
        }
        assert_eq!(obstacles.len(), 1);

        let r = tick(&mut obstacles, &mut score, 120, &config, &mut rng);
        assert!(r.spawned);
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn test_spawned_obstacle_advances() {
        let config = config();
        let mut obstacles = VecDeque::new();
        obstacles.push_back(Obstacle::with_top(config.screen_width, 50.0, &config));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(1);

        assert_eq!(obstacles[0].top, 50.0);
        assert_eq!(obstacles[0].bottom, 150.0);

        // Tick 1 is off-interval: pure advance
        tick(&mut obstacles, &mut score, 1, &config, &mut rng);
        assert_eq!(obstacles[0].x, config.screen_width - 1.5);
    }

    #[test]
    fn test_drawn_top_splits_then_advances() {
        let config = config();
        let mut obstacles = VecDeque::new();
        let mut score = Score::default();
        let mut draws = 0;

        // Spawn tick: the draw of 50 becomes the split, then the new obstacle moves
        let r = tick_with(&mut obstacles, &mut score, 0, &config, || {
            draws += 1;
            50.0
        });
        assert!(r.spawned);
        assert_eq!(draws, 1);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].top, 50.0);
        assert_eq!(obstacles[0].bottom, 150.0);
        assert_eq!(obstacles[0].x, config.screen_width - 1.5);

        // Off-interval tick: no draw, pure advance
        let r = tick_with(&mut obstacles, &mut score, 1, &config, || {
            draws += 1;
            0.0
        });
        assert!(!r.spawned);
        assert_eq!(draws, 1);
        assert_eq!(obstacles[0].x, config.screen_width - 3.0);
    }

    #[test]
    fn test_spawn_enters_at_right_edge_then_moves() {
        let config = config();
        let mut obstacles = VecDeque::new();
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(42);

        tick(&mut obstacles, &mut score, 0, &config, &mut rng);

        let o = &obstacles[0];
        assert_eq!(o.x, 400.0 - 1.5);
        assert!(o.top >= 0.0 && o.top < 200.0);
        assert_eq!(o.top + config.pipe_gap + o.bottom, 400.0);
        assert_eq!(o.width, config.pipe_width);
    }

    #[test]
    fn test_recycle_scores_and_updates_best() {
        let config = config();
        let mut obstacles = VecDeque::new();
        // Right edge at 1.0: one tick at 1.5 pushes it to -0.5
        obstacles.push_back(Obstacle::with_top(1.0 - config.pipe_width, 50.0, &config));
        obstacles.push_back(Obstacle::with_top(200.0, 80.0, &config));
        let mut score = Score { current: 2, best: 2 };
        let mut rng = Pcg32::seed_from_u64(3);

        let r = tick(&mut obstacles, &mut score, 1, &config, &mut rng);

        assert!(r.recycled);
        assert!(r.new_best);
        assert_eq!(score, Score { current: 3, best: 3 });
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].top, 80.0);
    }

    #[test]
    fn test_recycle_below_best() {
        let config = config();
        let mut obstacles = VecDeque::new();
        obstacles.push_back(Obstacle::with_top(-config.pipe_width, 50.0, &config));
        let mut score = Score { current: 0, best: 7 };
        let mut rng = Pcg32::seed_from_u64(3);

        let r = tick(&mut obstacles, &mut score, 1, &config, &mut rng);

        assert!(r.recycled);
        assert!(!r.new_best);
        assert_eq!(score, Score { current: 1, best: 7 });
    }

    #[test]
    fn test_edge_exactly_at_zero_is_kept() {
        let config = config();
        let mut obstacles = VecDeque::new();
        obstacles.push_back(Obstacle::with_top(1.5 - config.pipe_width, 50.0, &config));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(3);

        let r = tick(&mut obstacles, &mut score, 1, &config, &mut rng);

        assert!(!r.recycled);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].right(), 0.0);
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let config = config();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(random_top(&mut a, &config), random_top(&mut b, &config));
        }
    }

    proptest! {
        #[test]
        fn prop_queue_sorted_and_split_valid(seed in any::<u64>(), ticks in 1u64..2000) {
            let config = config();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obstacles = VecDeque::new();
            let mut score = Score::default();
            let mut last_score = 0;

            for t in 0..ticks {
                let before = obstacles.len();
                let r = tick(&mut obstacles, &mut score, t, &config, &mut rng);

                if r.spawned {
                    let o = obstacles.back().unwrap();
                    prop_assert!(o.top >= 0.0);
                    prop_assert_eq!(o.top + config.pipe_gap + o.bottom, config.screen_height);
                }
                // At most one removal per tick
                let spawned = usize::from(r.spawned);
                prop_assert!(obstacles.len() + 1 >= before + spawned);

                let xs: Vec<f32> = obstacles.iter().map(|o| o.x).collect();
                prop_assert!(xs.windows(2).all(|w| w[0] <= w[1]));

                prop_assert!(score.current >= last_score);
                prop_assert!(score.best >= score.current);
                last_score = score.current;
            }
        }
    }
}
