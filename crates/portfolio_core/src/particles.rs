//! Particle background: the declarative config handed to the renderer, and
//! the small simulation the GUI paints each frame.

use rand::{Rng, SeedableRng};

use crate::theme::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const TEAL: Rgb = Rgb(0x00, 0xff, 0xcc);
    pub const GRAPHITE: Rgb = Rgb(0x33, 0x33, 0x33);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    None,
    Repulse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size: f32,
    pub speed: f32,
    pub background: Rgb,
    pub color: Rgb,
    pub link_color: Rgb,
    pub links_enabled: bool,
    /// Particles closer than this are joined by a link.
    pub link_distance: f32,
    pub hover_mode: HoverMode,
    pub hover_radius: f32,
}

impl ParticleConfig {
    pub fn for_theme(theme: ThemePreference) -> Self {
        let (background, color) = match theme {
            ThemePreference::Dark => (Rgb::BLACK, Rgb::TEAL),
            ThemePreference::Light => (Rgb::WHITE, Rgb::GRAPHITE),
        };
        Self {
            count: 60,
            size: 2.0,
            speed: 0.5,
            background,
            color,
            link_color: Rgb::TEAL,
            links_enabled: true,
            link_distance: 150.0,
            hover_mode: HoverMode::Repulse,
            hover_radius: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let width = width.max(1.0);
        let height = height.max(1.0);
        let particles = (0..config.count)
            .map(|_| {
                let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
                Particle {
                    x: rng.random_range(0.0..width),
                    y: rng.random_range(0.0..height),
                    vx: angle.cos() * config.speed,
                    vy: angle.sin() * config.speed,
                }
            })
            .collect();
        Self {
            config,
            width,
            height,
            particles,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Colors change with the theme; positions are kept.
    pub fn set_config(&mut self, config: ParticleConfig) {
        self.config = config;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for p in &mut self.particles {
            p.x = wrap(p.x, self.width);
            p.y = wrap(p.y, self.height);
        }
    }

    /// Advances one tick (60 ticks per second of motion), wrapping at edges.
    pub fn step(&mut self, pointer: Option<(f32, f32)>) {
        let repulse = match (self.config.hover_mode, pointer) {
            (HoverMode::Repulse, Some(pointer)) => Some(pointer),
            _ => None,
        };
        let radius = self.config.hover_radius;

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if let Some((px, py)) = repulse {
                let dx = p.x - px;
                let dy = p.y - py;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > f32::EPSILON && dist < radius {
                    let push = radius - dist;
                    p.x += dx / dist * push;
                    p.y += dy / dist * push;
                }
            }

            p.x = wrap(p.x, self.width);
            p.y = wrap(p.y, self.height);
        }
    }

    /// Index pairs to join, with opacity fading linearly to zero at
    /// `link_distance`.
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        if !self.config.links_enabled {
            return Vec::new();
        }
        let max = self.config.link_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < max {
                    out.push((i, j, 1.0 - dist / max));
                }
            }
        }
        out
    }
}

fn wrap(value: f32, max: f32) -> f32 {
    let wrapped = value.rem_euclid(max);
    // rem_euclid can round up to `max` for tiny negative inputs
    if wrapped >= max {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_follows_theme() {
        let dark = ParticleConfig::for_theme(ThemePreference::Dark);
        assert_eq!(dark.background, Rgb::BLACK);
        assert_eq!(dark.color, Rgb::TEAL);

        let light = ParticleConfig::for_theme(ThemePreference::Light);
        assert_eq!(light.background, Rgb::WHITE);
        assert_eq!(light.color, Rgb::GRAPHITE);
        assert_eq!(light.link_color, Rgb::TEAL);
        assert_eq!(light.count, 60);
        assert_eq!(light.hover_mode, HoverMode::Repulse);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = ParticleConfig::for_theme(ThemePreference::Dark);
        let a = ParticleField::new(config, 800.0, 600.0, 7);
        let b = ParticleField::new(config, 800.0, 600.0, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 60);
    }

    #[test]
    fn particles_stay_inside_bounds() {
        let config = ParticleConfig::for_theme(ThemePreference::Light);
        let mut field = ParticleField::new(config, 320.0, 200.0, 1);
        for tick in 0..500 {
            let pointer = (tick % 3 == 0).then_some((160.0, 100.0));
            field.step(pointer);
        }
        field.resize(100.0, 50.0);
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..50.0).contains(&p.y), "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn links_disabled_yield_nothing() {
        let mut config = ParticleConfig::for_theme(ThemePreference::Dark);
        config.links_enabled = false;
        let field = ParticleField::new(config, 10.0, 10.0, 3);
        assert!(field.links().is_empty());
    }

    #[test]
    fn close_particles_are_linked_with_fading_alpha() {
        let config = ParticleConfig::for_theme(ThemePreference::Dark);
        let field = ParticleField::new(config, 10.0, 10.0, 3);
        let links = field.links();
        assert_eq!(links.len(), 60 * 59 / 2);
        assert!(links.iter().all(|(_, _, alpha)| *alpha > 0.0 && *alpha <= 1.0));
    }
}
