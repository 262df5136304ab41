use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use portfolio_core::{
    is_compact, resolve_data_root, JsonFileStore, ParticleConfig, PortfolioContent,
    ScrollListener, ScrollSignal, Section, ThemePreference, BACK_TO_TOP_THRESHOLD,
    DEFAULT_SPLASH_DELAY, NAV_SHADOW_THRESHOLD, PREFERENCES_FILE,
};

use crate::controller::events::UiAction;
use crate::controller::orchestration::dispatch_ui_action;
use crate::controller::reducer::{self, PageState};
use crate::ui::particles::ParticleBackground;
use crate::ui::sections::{self, SectionCtx};
use crate::ui::theme::{visuals_for_theme, Palette, ACCENT, ACCENT_STRONG};

const UI_ACTION_QUEUE_CAPACITY: usize = 256;
const SLIDE_SECONDS: f64 = 0.5;
const HERO_SECONDS: f64 = 0.6;
const FADE_SECONDS: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub content_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub splash_delay: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            data_dir: None,
            splash_delay: DEFAULT_SPLASH_DELAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub preferences_path: PathBuf,
}

impl AppPaths {
    pub fn from_startup(startup: &StartupConfig) -> anyhow::Result<Self> {
        let root = resolve_data_root(startup.data_dir.as_deref())
            .ok_or_else(|| anyhow::anyhow!("unable to resolve local app data dir"))?;

        Ok(Self {
            preferences_path: root.join(PREFERENCES_FILE),
            data_root: root,
        })
    }
}

pub fn load_content(startup: &StartupConfig) -> anyhow::Result<PortfolioContent> {
    use anyhow::Context as _;

    match &startup.content_path {
        Some(path) => PortfolioContent::load(path)
            .with_context(|| format!("failed to load content from '{}'", path.display())),
        None => Ok(PortfolioContent::builtin()),
    }
}

/// Start time of a one-shot entrance animation.
#[derive(Debug, Clone, Copy)]
struct Entrance {
    started_at: Option<f64>,
}

impl Entrance {
    fn pending() -> Self {
        Self { started_at: None }
    }

    fn restart(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    fn progress(&self, now: f64, duration: f64) -> f32 {
        match self.started_at {
            Some(started) => ((now - started) / duration).clamp(0.0, 1.0) as f32,
            None => 0.0,
        }
    }
}

pub struct PortfolioApp {
    actions_tx: Sender<UiAction>,
    actions_rx: Receiver<UiAction>,
    page: PageState<JsonFileStore>,
    scroll: ScrollSignal,
    nav_shadow: ScrollListener,
    back_to_top: ScrollListener,
    applied_theme: Option<ThemePreference>,
    background: ParticleBackground,
    hero_entrance: Entrance,
    slide_entrance: Entrance,
    shown_slide: usize,
}

impl PortfolioApp {
    pub fn bootstrap(
        startup: &StartupConfig,
        paths: &AppPaths,
        content: PortfolioContent,
    ) -> anyhow::Result<Self> {
        let (actions_tx, actions_rx) = bounded::<UiAction>(UI_ACTION_QUEUE_CAPACITY);
        let store = JsonFileStore::new(&paths.preferences_path);
        let page = PageState::new(content, store, Instant::now(), startup.splash_delay)?;

        let scroll = ScrollSignal::new();
        let nav_shadow = scroll.subscribe(NAV_SHADOW_THRESHOLD);
        let back_to_top = scroll.subscribe(BACK_TO_TOP_THRESHOLD);

        tracing::info!(
            theme = %page.theme.current(),
            preferences = %paths.preferences_path.display(),
            "portfolio ready"
        );

        Ok(Self {
            actions_tx,
            actions_rx,
            shown_slide: page.carousel.index(),
            page,
            scroll,
            nav_shadow,
            back_to_top,
            applied_theme: None,
            background: ParticleBackground::new(0x5eed),
            hero_entrance: Entrance::pending(),
            slide_entrance: Entrance::pending(),
        })
    }

    pub fn window_title(&self) -> &str {
        &self.page.content.title
    }

    fn process_ui_actions(&mut self) {
        while let Ok(action) = self.actions_rx.try_recv() {
            tracing::debug!(action = action.name(), "applying ui action");
            reducer::apply(&mut self.page, action);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let theme = self.page.theme.current();
        if self.applied_theme == Some(theme) {
            return;
        }
        let palette = Palette::for_theme(theme);
        ctx.set_visuals(visuals_for_theme(theme, &palette));
        self.applied_theme = Some(theme);
    }

    fn dispatch(&self, action: UiAction) {
        dispatch_ui_action(&self.actions_tx, action);
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, palette: &Palette) {
        let compact = is_compact(ctx.screen_rect().width());
        if !compact && self.page.menu.is_open() {
            self.page.menu.close();
        }

        let frame = egui::Frame::NONE
            .fill(palette.nav_fill)
            .stroke(egui::Stroke::new(1.0, palette.nav_stroke))
            .inner_margin(egui::Margin::symmetric(24, 14));

        let panel = egui::TopBottomPanel::top("nav_bar")
            .frame(frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.page.content.profile.brand)
                            .size(22.0)
                            .strong()
                            .color(ACCENT),
                    );

                    if !compact {
                        ui.add_space(32.0);
                        for section in Section::NAVIGABLE {
                            let link = egui::Button::new(
                                egui::RichText::new(section.anchor().to_uppercase()).size(13.0),
                            )
                            .frame(false);
                            if ui.add(link).clicked() {
                                self.dispatch(UiAction::NavigateTo(section));
                            }
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if compact {
                            let icon = if self.page.menu.is_open() { "✕" } else { "☰" };
                            if ui.add(egui::Button::new(icon).frame(false)).clicked() {
                                self.dispatch(UiAction::ToggleMobileMenu);
                            }
                        }
                        let theme_icon = if self.page.theme.current().is_dark() {
                            "☀"
                        } else {
                            "🌙"
                        };
                        if ui
                            .add(egui::Button::new(egui::RichText::new(theme_icon).size(18.0)).frame(false))
                            .on_hover_text("Toggle dark mode")
                            .clicked()
                        {
                            self.dispatch(UiAction::ToggleTheme);
                        }
                        let contact = &self.page.content.contact;
                        ui.hyperlink_to("LinkedIn", &contact.linkedin);
                        ui.hyperlink_to("GitHub", &contact.github);
                    });
                });

                if compact && self.page.menu.is_open() {
                    ui.add_space(10.0);
                    for section in Section::NAVIGABLE {
                        let link = egui::Button::new(egui::RichText::new(section.anchor()).size(17.0))
                            .frame(false);
                        if ui.add(link).clicked() {
                            self.dispatch(UiAction::NavigateTo(section));
                        }
                    }
                }
            });

        if self.nav_shadow.visible() {
            let rect = panel.response.rect;
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("nav_shadow"),
            ));
            for step in 0..6u8 {
                let y = rect.bottom() + f32::from(step);
                painter.hline(
                    rect.x_range(),
                    y,
                    egui::Stroke::new(1.0, egui::Color32::from_black_alpha(60 - step * 10)),
                );
            }
        }
    }

    fn show_page(&mut self, ctx: &egui::Context, palette: &Palette) {
        let now = ctx.input(|i| i.time);
        let transition = self.page.carousel.transition();
        if transition.key != self.shown_slide {
            self.shown_slide = transition.key;
            self.slide_entrance.restart(now);
        }
        let hero_progress = self.hero_entrance.progress(now, HERO_SECONDS);
        let slide_progress = if self.slide_entrance.started_at.is_some() {
            self.slide_entrance.progress(now, SLIDE_SECONDS)
        } else {
            1.0
        };
        let scroll_request = self.page.take_scroll_request();

        let cx = SectionCtx {
            palette,
            actions: &self.actions_tx,
        };
        let page = &self.page;

        let output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for section in Section::ALL {
                            let rect = match section {
                                Section::Home => {
                                    sections::hero(ui, &cx, &page.content.profile, hero_progress)
                                }
                                Section::About => sections::about(ui, &cx, &page.content.profile),
                                Section::Projects => {
                                    sections::projects(ui, &cx, &page.content.projects)
                                }
                                Section::Experience => {
                                    sections::experience(ui, &cx, &page.content.experience)
                                }
                                Section::Education => {
                                    sections::education(ui, &cx, &page.content.education)
                                }
                                Section::Testimonials => {
                                    sections::testimonials(ui, &cx, &page.carousel, slide_progress)
                                }
                                Section::Contact => {
                                    sections::contact(ui, &cx, &page.content.contact)
                                }
                            };
                            if scroll_request == Some(section) {
                                tracing::debug!(section = section.anchor(), "scrolling to section");
                                ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                            }
                        }
                    })
            })
            .inner;

        self.scroll.publish(output.state.offset.y);
    }

    fn show_back_to_top(&self, ctx: &egui::Context) {
        if !self.back_to_top.visible() {
            return;
        }
        egui::Area::new(egui::Id::new("back_to_top"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("⬆").size(18.0).color(egui::Color32::WHITE),
                )
                .fill(ACCENT_STRONG)
                .corner_radius(egui::CornerRadius::same(22))
                .min_size(egui::vec2(44.0, 44.0));
                if ui.add(button).on_hover_text("Back to top").clicked() {
                    self.dispatch(UiAction::ScrollToTop);
                }
            });
    }

    fn show_detail_modal(&self, ctx: &egui::Context, palette: &Palette) {
        let Some(detail) = self.page.modal.selected() else {
            return;
        };

        let screen = ctx.screen_rect();
        let fade = ctx.animate_bool_with_time(egui::Id::new("detail_modal_fade"), true, FADE_SECONDS);
        egui::Area::new(egui::Id::new("detail_modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(
                    screen,
                    0.0,
                    egui::Color32::from_black_alpha((128.0 * fade) as u8),
                );
                if backdrop.clicked() {
                    self.dispatch(UiAction::CloseDetail);
                }
            });

        let frame = egui::Frame::NONE
            .fill(palette.modal_fill)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::same(28));
        egui::Window::new("More Info")
            .id(egui::Id::new("detail_modal"))
            .order(egui::Order::Foreground)
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .frame(frame)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .max_width(520.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("More Info").size(24.0).strong().color(ACCENT));
                ui.add_space(6.0);
                ui.label(egui::RichText::new(detail.title()).strong().color(palette.modal_text));
                ui.add_space(10.0);
                ui.label(egui::RichText::new(detail.body()).color(palette.modal_text));
                ui.add_space(16.0);
                let close = egui::Button::new(egui::RichText::new("Close").color(egui::Color32::WHITE))
                    .fill(ACCENT)
                    .corner_radius(egui::CornerRadius::same(18))
                    .min_size(egui::vec2(110.0, 36.0));
                if ui.add(close).clicked() {
                    self.dispatch(UiAction::CloseDetail);
                }
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dispatch(UiAction::CloseDetail);
        }
    }

    fn show_splash(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.page.splash.poll(now) {
            tracing::info!("splash dismissed");
            self.hero_entrance.restart(ctx.input(|i| i.time));
        }

        let loading = self.page.splash.is_loading();
        let opacity = ctx.animate_bool_with_time(egui::Id::new("splash_fade"), loading, FADE_SECONDS);
        if opacity <= 0.0 {
            return;
        }
        if let Some(remaining) = self.page.splash.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        let screen = ctx.screen_rect();
        let brand = &self.page.content.profile.brand;
        egui::Area::new(egui::Id::new("splash"))
            .order(egui::Order::Tooltip)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.allocate_rect(screen, egui::Sense::click());
                let painter = ui.painter();
                painter.rect_filled(screen, 0.0, egui::Color32::BLACK.gamma_multiply(opacity));
                painter.text(
                    screen.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("Loading {brand}..."),
                    egui::FontId::proportional(26.0),
                    ACCENT.gamma_multiply(opacity),
                );
            });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_actions();
        self.apply_theme_if_needed(ctx);

        let theme = self.page.theme.current();
        let palette = Palette::for_theme(theme);
        self.background.paint(ctx, ParticleConfig::for_theme(theme));

        self.show_nav_bar(ctx, &palette);
        self.show_page(ctx, &palette);
        self.show_back_to_top(ctx);
        self.show_detail_modal(ctx, &palette);
        self.show_splash(ctx);

        // particles animate continuously
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.page.splash.cancel();
        tracing::info!(
            theme = %self.page.theme.current(),
            listeners = self.scroll.listener_count(),
            "portfolio closed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup_in(dir: &std::path::Path) -> StartupConfig {
        StartupConfig {
            data_dir: Some(dir.to_path_buf()),
            ..StartupConfig::default()
        }
    }

    #[test]
    fn explicit_data_dir_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::from_startup(&startup_in(dir.path())).expect("paths");
        assert_eq!(paths.data_root, dir.path());
        assert_eq!(paths.preferences_path, dir.path().join("preferences.json"));
    }

    #[test]
    fn builtin_content_used_without_path() {
        let content = load_content(&StartupConfig::default()).expect("content");
        assert_eq!(content, PortfolioContent::builtin());
    }

    #[test]
    fn missing_content_file_reports_path() {
        let startup = StartupConfig {
            content_path: Some(PathBuf::from("/nonexistent/portfolio.toml")),
            ..StartupConfig::default()
        };
        let err = load_content(&startup).expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/portfolio.toml"));
    }

    #[test]
    fn bootstrap_reads_stored_theme_and_wires_scroll_flags() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("preferences.json"), r#"{"theme":"dark"}"#)
            .expect("seed prefs");
        let startup = startup_in(dir.path());
        let paths = AppPaths::from_startup(&startup).expect("paths");

        let mut app = PortfolioApp::bootstrap(&startup, &paths, PortfolioContent::builtin())
            .expect("bootstrap");
        assert_eq!(app.page.theme.current(), ThemePreference::Dark);
        assert_eq!(app.scroll.listener_count(), 2);
        assert_eq!(app.window_title(), "Manali | Blockchain Developer Portfolio");

        app.scroll.publish(120.0);
        assert!(app.nav_shadow.visible());
        assert!(!app.back_to_top.visible());

        app.dispatch(UiAction::ToggleTheme);
        app.dispatch(UiAction::NextTestimonial);
        app.process_ui_actions();
        assert_eq!(app.page.theme.current(), ThemePreference::Light);
        assert_eq!(app.page.carousel.index(), 1);

        let raw = std::fs::read_to_string(&paths.preferences_path).expect("prefs");
        assert!(raw.contains("\"light\""));
    }

    #[test]
    fn entrance_progress_clamps() {
        let mut entrance = Entrance::pending();
        assert_eq!(entrance.progress(5.0, 0.5), 0.0);
        entrance.restart(1.0);
        assert_eq!(entrance.progress(1.25, 0.5), 0.5);
        assert_eq!(entrance.progress(9.0, 0.5), 1.0);
    }
}
