//! Paints the particle field behind the page.

use eframe::egui;
use portfolio_core::{ParticleConfig, ParticleField};

use crate::ui::theme::color;

const TICKS_PER_SECOND: f64 = 60.0;
const MAX_TICKS_PER_FRAME: u32 = 4;

pub struct ParticleBackground {
    field: Option<ParticleField>,
    last_time: Option<f64>,
    seed: u64,
}

impl ParticleBackground {
    pub fn new(seed: u64) -> Self {
        Self {
            field: None,
            last_time: None,
            seed,
        }
    }

    pub fn paint(&mut self, ctx: &egui::Context, config: ParticleConfig) {
        let rect = ctx.screen_rect();
        let field = self.field.get_or_insert_with(|| {
            ParticleField::new(config, rect.width(), rect.height(), self.seed)
        });
        if field.config() != &config {
            field.set_config(config);
        }
        field.resize(rect.width(), rect.height());

        let now = ctx.input(|i| i.time);
        let elapsed = self.last_time.map_or(0.0, |last| (now - last).max(0.0));
        self.last_time = Some(now);
        let ticks = ((elapsed * TICKS_PER_SECOND).round() as u32).min(MAX_TICKS_PER_FRAME);

        let pointer = ctx
            .pointer_hover_pos()
            .map(|pos| (pos.x - rect.min.x, pos.y - rect.min.y));
        for _ in 0..ticks {
            field.step(pointer);
        }

        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(rect, 0.0, color(config.background));

        let to_screen = |x: f32, y: f32| rect.min + egui::vec2(x, y);
        let particles = field.particles();
        let link_color = color(config.link_color);
        for (a, b, alpha) in field.links() {
            let (pa, pb) = (particles[a], particles[b]);
            painter.line_segment(
                [to_screen(pa.x, pa.y), to_screen(pb.x, pb.y)],
                egui::Stroke::new(1.0, link_color.gamma_multiply(alpha * 0.4)),
            );
        }
        let dot_color = color(config.color);
        for p in particles {
            painter.circle_filled(to_screen(p.x, p.y), config.size, dot_color);
        }
    }
}
