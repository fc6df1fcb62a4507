//! Rendering module
//!
//! The game draws through the `Surface` trait: a minimal 2D canvas API
//! (clear, sprites, filled rects, text). The browser implementation wraps a
//! `CanvasRenderingContext2d`; tests and the headless runner use their own.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::settings::{DeathStyle, GameConfig};
use crate::sim::{Actor, GameState};

/// Images the surface knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Actor,
    Explosion,
}

/// A 2D drawing target
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn draw_sprite(&mut self, _sprite: Sprite, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn set_fill_color(&mut self, _color: &str) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn set_font(&mut self, _font: &str) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) {}
}

const PIPE_COLOR: &str = "green";
const TEXT_COLOR: &str = "black";
const HUD_FONT: &str = "20px Arial";
const TITLE_FONT: &str = "30px Arial";

/// Draw the actor, or its explosion once destroyed (Exploded style only)
fn draw_actor<S: Surface + ?Sized>(surface: &mut S, actor: &Actor, config: &GameConfig) {
    if actor.destroyed && config.death_style == DeathStyle::Exploded {
        // Scaled up around the actor's center
        let size = actor.size * config.explosion_scale;
        let center = actor.pos + actor.size / 2.0;
        let corner = center - size / 2.0;
        surface.draw_sprite(Sprite::Explosion, corner.x, corner.y, size.x, size.y);
    } else {
        surface.draw_sprite(
            Sprite::Actor,
            actor.pos.x,
            actor.pos.y,
            actor.size.x,
            actor.size.y,
        );
    }
}

/// Render one running frame: actor, obstacles, score HUD
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, config: &GameConfig) {
    let (w, h) = (config.screen_width, config.screen_height);
    surface.clear(0.0, 0.0, w, h);

    draw_actor(surface, &state.actor, config);

    surface.set_fill_color(PIPE_COLOR);
    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.x, 0.0, obstacle.width, obstacle.top);
        surface.fill_rect(
            obstacle.x,
            obstacle.gap_bottom(h),
            obstacle.width,
            obstacle.bottom,
        );
    }

    surface.set_fill_color(TEXT_COLOR);
    surface.set_font(HUD_FONT);
    surface.fill_text(&format!("Score: {}", state.score.current), 10.0, 25.0);
    surface.fill_text(&format!("High Score: {}", state.score.best), 10.0, 50.0);
}

/// Render the game-over overlay on top of the last frame
pub fn render_game_over<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    config: &GameConfig,
) {
    let cx = config.screen_width / 2.0;
    let cy = config.screen_height / 2.0;

    surface.set_fill_color(TEXT_COLOR);
    surface.set_font(TITLE_FONT);
    surface.fill_text("Game Over", cx - 75.0, cy - 15.0);

    surface.set_font(HUD_FONT);
    surface.fill_text(&format!("Score: {}", state.score.current), cx - 25.0, cy + 15.0);
    surface.fill_text(
        &format!("High Score: {}", state.score.best),
        cx - 50.0,
        cy + 45.0,
    );
    surface.fill_text(&restart_prompt(config), cx - 75.0, cy + 75.0);
}

/// "Press R to Restart", following the configured binding
fn restart_prompt(config: &GameConfig) -> String {
    let code = config.keys.restart.as_str();
    let key = code.strip_prefix("Key").unwrap_or(code);
    format!("Press {key} to Restart")
}

/// Records draw calls for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Clear(f32, f32, f32, f32),
    Sprite(Sprite, f32, f32, f32, f32),
    Color(String),
    Rect(f32, f32, f32, f32),
    Font(String),
    Text(String, f32, f32),
}

#[cfg(test)]
impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t, _, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count_text(&self, text: &str) -> usize {
        self.texts().iter().filter(|t| **t == text).count()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Clear(x, y, w, h));
    }
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Sprite(sprite, x, y, w, h));
    }
    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(DrawCall::Color(color.to_string()));
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Rect(x, y, w, h));
    }
    fn set_font(&mut self, font: &str) {
        self.calls.push(DrawCall::Font(font.to_string()));
    }
    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Text(text.to_string(), x, y));
    }
}
