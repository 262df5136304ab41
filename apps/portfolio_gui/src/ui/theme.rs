//! Colors and egui visuals for the two display modes.
//!
//! Everything the page paints derives from the current [`ThemePreference`];
//! no section picks its own dark or light colors.

use eframe::egui;
use portfolio_core::{Rgb, ThemePreference};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const ACCENT_STRONG: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page_background: egui::Color32,
    pub text: egui::Color32,
    pub muted_text: egui::Color32,
    pub body_text: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub nav_fill: egui::Color32,
    pub nav_stroke: egui::Color32,
    pub chip_fill: egui::Color32,
    pub chip_text: egui::Color32,
    pub modal_fill: egui::Color32,
    pub modal_text: egui::Color32,
    pub testimonial_name: egui::Color32,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self {
                page_background: egui::Color32::BLACK,
                text: egui::Color32::WHITE,
                muted_text: egui::Color32::from_rgb(156, 163, 175),
                body_text: egui::Color32::from_rgb(209, 213, 219),
                card_fill: egui::Color32::from_white_alpha(20),
                card_stroke: egui::Color32::from_rgb(39, 39, 42),
                nav_fill: egui::Color32::from_black_alpha(153),
                nav_stroke: egui::Color32::from_rgb(63, 63, 70),
                chip_fill: egui::Color32::from_rgba_unmultiplied(20, 83, 45, 102),
                chip_text: egui::Color32::from_rgb(134, 239, 172),
                modal_fill: egui::Color32::from_rgb(24, 24, 27),
                modal_text: egui::Color32::from_rgb(209, 213, 219),
                testimonial_name: egui::Color32::from_rgb(147, 197, 253),
            },
            ThemePreference::Light => Self {
                page_background: egui::Color32::WHITE,
                text: egui::Color32::BLACK,
                muted_text: egui::Color32::from_rgb(75, 85, 99),
                body_text: egui::Color32::from_rgb(55, 65, 81),
                card_fill: egui::Color32::from_black_alpha(10),
                card_stroke: egui::Color32::from_rgb(212, 212, 216),
                nav_fill: egui::Color32::from_white_alpha(200),
                nav_stroke: egui::Color32::from_rgb(212, 212, 216),
                chip_fill: egui::Color32::from_rgba_unmultiplied(187, 247, 208, 160),
                chip_text: egui::Color32::from_rgb(21, 128, 61),
                modal_fill: egui::Color32::WHITE,
                modal_text: egui::Color32::from_rgb(75, 85, 99),
                testimonial_name: egui::Color32::from_rgb(37, 99, 235),
            },
        }
    }
}

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn visuals_for_theme(theme: ThemePreference, palette: &Palette) -> egui::Visuals {
    let mut visuals = match theme {
        ThemePreference::Dark => egui::Visuals::dark(),
        ThemePreference::Light => egui::Visuals::light(),
    };

    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.page_background;
    visuals.window_fill = palette.modal_fill;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT_STRONG;
    visuals.widgets.hovered.bg_fill = ACCENT_STRONG.gamma_multiply(0.85);
    visuals.widgets.active.bg_fill = ACCENT_STRONG;
    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_by_theme() {
        let dark = Palette::for_theme(ThemePreference::Dark);
        let light = Palette::for_theme(ThemePreference::Light);
        assert_eq!(dark.page_background, egui::Color32::BLACK);
        assert_eq!(light.page_background, egui::Color32::WHITE);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn visuals_follow_preference() {
        let theme = ThemePreference::Dark;
        let visuals = visuals_for_theme(theme, &Palette::for_theme(theme));
        assert!(visuals.dark_mode);
        assert_eq!(visuals.hyperlink_color, ACCENT);

        let theme = ThemePreference::Light;
        let visuals = visuals_for_theme(theme, &Palette::for_theme(theme));
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, egui::Color32::WHITE);
    }

    #[test]
    fn particle_colors_convert() {
        assert_eq!(color(Rgb::TEAL), egui::Color32::from_rgb(0, 255, 204));
    }
}
