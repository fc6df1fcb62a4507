//! Game loop controller
//!
//! Owns one game's state and drives it from the host's frame callback.
//! While RUNNING every frame simulates one tick, renders, and asks the host
//! for another frame. The frame that detects a collision renders the
//! game-over overlay once and does not ask again, which ends the chain.
//! A restart starts a new chain; restarting while one is alive does nothing.

use crate::input::InputAction;
use crate::renderer::{self, Surface};
use crate::settings::GameConfig;
use crate::sim::{self, GamePhase, GameState, TickReport, autopilot};

/// Host hook for "call me again before the next repaint"
pub trait Scheduler {
    fn request_frame(&mut self);
}

/// One game instance
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    /// A frame request is outstanding
    chain_active: bool,
    /// The overlay for the current GAME_OVER has been drawn
    game_over_rendered: bool,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        Self {
            config,
            state,
            chain_active: false,
            game_over_rendered: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Whether a frame request is outstanding
    pub fn is_scheduled(&self) -> bool {
        self.chain_active
    }

    /// Begin the frame chain. Returns false if one is already running or the
    /// round is over.
    pub fn start<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) -> bool {
        if self.chain_active || !self.state.is_running() {
            return false;
        }
        self.chain_active = true;
        scheduler.request_frame();
        true
    }

    /// Host frame callback
    pub fn frame<S, C>(&mut self, surface: &mut S, scheduler: &mut C) -> TickReport
    where
        S: Surface + ?Sized,
        C: Scheduler + ?Sized,
    {
        // This callback consumed the outstanding request
        self.chain_active = false;

        if !self.state.is_running() {
            if !self.game_over_rendered {
                renderer::render_game_over(surface, &self.state, &self.config);
                self.game_over_rendered = true;
            }
            return TickReport::default();
        }

        let report = sim::tick(&mut self.state, &self.config);
        if report.new_best {
            log::info!("New best score: {}", self.state.score.best);
        }

        renderer::render_frame(surface, &self.state, &self.config);

        if report.collided {
            log::info!(
                "Game over at tick {}: score {} (best {})",
                self.state.tick,
                self.state.score.current,
                self.state.score.best
            );
            renderer::render_game_over(surface, &self.state, &self.config);
            self.game_over_rendered = true;
        } else {
            self.chain_active = true;
            scheduler.request_frame();
        }

        report
    }

    /// Flap input; ignored unless RUNNING
    pub fn on_flap(&mut self) {
        if self.state.is_running() {
            sim::flap(&mut self.state.actor);
        }
    }

    /// Restart input; ignored unless GAME_OVER. Returns true if a new frame
    /// chain was started.
    pub fn on_restart<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) -> bool {
        if self.state.is_running() {
            log::debug!("Restart ignored while running");
            return false;
        }

        self.state.restart(&self.config);
        self.game_over_rendered = false;
        log::info!("Restarted (best {})", self.state.score.best);
        self.start(scheduler)
    }

    /// Dispatch a mapped input action
    pub fn handle<C: Scheduler + ?Sized>(&mut self, action: InputAction, scheduler: &mut C) {
        match action {
            InputAction::Flap => self.on_flap(),
            InputAction::Restart => {
                self.on_restart(scheduler);
            }
        }
    }
}

/// Scheduler for hosts that step the game in a plain loop
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopScheduler {
    pub requested: u32,
}

impl Scheduler for LoopScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}

/// Let the autopilot play until the round ends or `max_ticks` have run.
/// Returns the number of ticks simulated.
pub fn run_autopilot<S: Surface + ?Sized>(game: &mut Game, surface: &mut S, max_ticks: u64) -> u64 {
    let mut scheduler = LoopScheduler::default();
    game.start(&mut scheduler);

    let mut ticks = 0;
    while ticks < max_ticks && game.is_scheduled() {
        if autopilot::should_flap(&game.state, &game.config) {
            game.on_flap();
        }
        game.frame(surface, &mut scheduler);
        ticks += 1;
    }
    ticks
}
