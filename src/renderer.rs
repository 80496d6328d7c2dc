// Renderer struct that handles the canvas 2d calls: the fading-trail
// overlay, the particle circles with their radial-gradient glow, and the
// distance-faded connecting lines between nearby pairs.

use crate::color::Color;
use crate::particle::{self, ParticleField};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

// Low-opacity overlay painted each frame instead of a full clear, so
// particles leave short trails.
const TRAIL_FILL: &str = "rgba(10, 10, 15, 0.1)";

// Connecting lines are always cyan regardless of the endpoint colors.
const LINE_COLOR: Color = Color::from_u32(0x00d4ff);

const LINE_WIDTH: f64 = 0.5;

// Glow circles span 3x the particle radius, starting at quarter opacity.
const GLOW_SCALE: f64 = 3.0;
const GLOW_ALPHA: f64 = 0.25;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Returns None when the 2d context is unavailable; the background then
    // renders nothing at all.
    pub fn new(canvas: HtmlCanvasElement) -> Option<CanvasRenderer> {
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasRenderer { canvas, context })
    }

    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    /// Sizes the canvas backing store to the window. Particle positions are
    /// not rescaled on resize, only the wrap bounds follow.
    pub fn fit_to_window(&self, window: &Window) {
        let width = window.inner_width().ok().and_then(|w| w.as_f64());
        let height = window.inner_height().ok().and_then(|h| h.as_f64());
        if let (Some(width), Some(height)) = (width, height) {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
        }
    }

    pub fn render(&self, field: &ParticleField) -> Result<(), JsValue> {
        let width = self.width();
        let height = self.height();

        self.context.set_fill_style(&JsValue::from_str(TRAIL_FILL));
        self.context.fill_rect(0.0, 0.0, width, height);

        for p in field.particles() {
            self.draw_particle(p)?;
        }

        let particles = field.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dist = particle::distance(&particles[i], &particles[j]);
                if let Some(alpha) = particle::connection_alpha(dist) {
                    self.draw_connection(particles[i].pos, particles[j].pos, alpha);
                }
            }
        }

        Ok(())
    }

    fn draw_particle(&self, p: &particle::Particle) -> Result<(), JsValue> {
        let [x, y] = p.pos;

        self.context.begin_path();
        self.context
            .arc(x, y, p.radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context
            .set_fill_style(&JsValue::from_str(&p.color.to_css()));
        self.context.fill();

        let gradient = self
            .context
            .create_radial_gradient(x, y, 0.0, x, y, p.radius * GLOW_SCALE)?;
        gradient.add_color_stop(0.0, &p.color.to_css_with_alpha(GLOW_ALPHA))?;
        gradient.add_color_stop(1.0, "transparent")?;
        self.context.set_fill_style(&gradient);
        self.context.begin_path();
        self.context
            .arc(x, y, p.radius * GLOW_SCALE, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.fill();

        Ok(())
    }

    fn draw_connection(&self, from: [f64; 2], to: [f64; 2], alpha: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&LINE_COLOR.to_css_with_alpha(alpha)));
        self.context.set_line_width(LINE_WIDTH);
        self.context.stroke();
    }
}
