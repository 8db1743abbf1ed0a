//! Canvas2D render pass
//!
//! Draws one frame in a fixed order, strictly after the simulation tick:
//! clear, background, actor, obstacles, stars, HUD. Rendering reads the
//! session and never mutates it.

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::SPACE_SCORE;
use crate::sim::{GameContext, Scale, background_color};

pub struct RenderPass {
    context: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
}

impl RenderPass {
    pub fn new(context: CanvasRenderingContext2d, sprite: HtmlImageElement) -> Self {
        Self { context, sprite }
    }

    /// Draw the whole frame onto a `width` x `height` surface.
    pub fn render(&self, ctx: &GameContext, scale: Scale, width: f64, height: f64) {
        let session = &ctx.session;

        self.context.clear_rect(0.0, 0.0, width, height);

        self.context
            .set_fill_style_str(&background_color(session.score).to_css());
        self.context.fill_rect(0.0, 0.0, width, height);

        self.draw_bird(session);
        for obstacle in &session.obstacles {
            self.draw_obstacle(obstacle, height);
        }
        if session.score > SPACE_SCORE {
            self.draw_stars(session);
        }
        self.draw_hud(session, scale);
    }

    /// Sprite centered on the bird; skipped while the image has not loaded
    /// so a failed asset fetch degrades to an invisible actor instead of
    /// halting the loop.
    fn draw_bird(&self, session: &crate::sim::GameSession) {
        if !self.sprite.complete() || self.sprite.natural_width() == 0 {
            return;
        }
        let bird = &session.bird;
        let side = f64::from(bird.radius) * 2.0;
        if let Err(err) = self
            .context
            .draw_image_with_html_image_element_and_dw_and_dh(
                &self.sprite,
                f64::from(bird.pos.x - bird.radius),
                f64::from(bird.pos.y - bird.radius),
                side,
                side,
            )
        {
            log::warn!("sprite draw failed: {err:?}");
        }
    }

    /// Two filled rectangles with the gap between them
    fn draw_obstacle(&self, obstacle: &crate::sim::Obstacle, surface_height: f64) {
        self.context.set_fill_style_str("green");
        self.context.fill_rect(
            f64::from(obstacle.x),
            0.0,
            f64::from(obstacle.width),
            f64::from(obstacle.gap_top),
        );
        let gap_bottom = f64::from(obstacle.gap_bottom());
        self.context.fill_rect(
            f64::from(obstacle.x),
            gap_bottom,
            f64::from(obstacle.width),
            surface_height - gap_bottom,
        );
    }

    fn draw_stars(&self, session: &crate::sim::GameSession) {
        self.context.set_fill_style_str("white");
        for star in &session.stars {
            self.context.begin_path();
            let _ = self.context.arc(
                f64::from(star.pos.x),
                f64::from(star.pos.y),
                f64::from(star.size),
                0.0,
                TAU,
            );
            self.context.fill();
        }
    }

    /// Current score, fixed top-left
    fn draw_hud(&self, session: &crate::sim::GameSession, scale: Scale) {
        self.context.set_fill_style_str("white");
        self.context
            .set_font(&format!("{}px Arial", (48.0 * scale.y).round() as u32));
        let _ = self.context.fill_text(
            &format!("Score: {}", session.score),
            f64::from(20.0 * scale.x),
            f64::from(100.0 * scale.y),
        );
    }
}
