//! Canvas 2D surface for the browser

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Sprite, Surface};

/// Draws onto a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    actor_image: HtmlImageElement,
    /// Optional; the actor sprite is used when it failed to load
    explosion_image: Option<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        actor_image: HtmlImageElement,
        explosion_image: Option<HtmlImageElement>,
    ) -> Self {
        Self {
            ctx,
            actor_image,
            explosion_image,
        }
    }

    fn image(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Actor => &self.actor_image,
            Sprite::Explosion => self.explosion_image.as_ref().unwrap_or(&self.actor_image),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        let image = self.image(sprite);
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image, x as f64, y as f64, w as f64, h as f64,
        ) {
            log::warn!("drawImage failed for {:?}: {:?}", sprite, e);
        }
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
