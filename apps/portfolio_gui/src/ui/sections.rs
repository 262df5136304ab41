//! Page sections. Each renderer returns the rect it occupied so the page can
//! scroll a section into view.

use crossbeam_channel::Sender;
use eframe::egui;
use portfolio_core::{
    Carousel, ContactInfo, EducationEntry, ExperienceEntry, ModalDetail, Profile, Project,
    Section, SlideTransition, TestimonialRecord,
};

use crate::controller::{events::UiAction, orchestration::dispatch_ui_action};
use crate::ui::theme::{Palette, ACCENT, ACCENT_STRONG};

/// Horizontal travel of an entering testimonial, in points.
const SLIDE_DISTANCE: f32 = 50.0;

pub struct SectionCtx<'a> {
    pub palette: &'a Palette,
    pub actions: &'a Sender<UiAction>,
}

impl SectionCtx<'_> {
    fn dispatch(&self, action: UiAction) {
        dispatch_ui_action(self.actions, action);
    }
}

fn centered_column(ui: &mut egui::Ui, max_width: f32, add: impl FnOnce(&mut egui::Ui)) -> egui::Rect {
    let available = ui.available_width();
    let width = available.min(max_width);
    let margin = ((available - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.add_space(48.0);
            add(ui);
            ui.add_space(48.0);
        });
    })
    .response
    .rect
}

fn section_heading(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).size(34.0).strong().color(palette.text));
    });
    ui.add_space(28.0);
}

fn pill_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_string())
            .size(18.0)
            .color(egui::Color32::WHITE),
    )
    .fill(ACCENT_STRONG)
    .corner_radius(egui::CornerRadius::same(24))
    .min_size(egui::vec2(220.0, 46.0))
}

/// Bordered card whose border turns accent on hover.
fn card<R>(ui: &mut egui::Ui, palette: &Palette, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let inner = egui::Frame::NONE
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        });
    if ui.rect_contains_pointer(inner.response.rect) {
        ui.painter().rect_stroke(
            inner.response.rect,
            egui::CornerRadius::same(12),
            egui::Stroke::new(1.0, ACCENT),
            egui::StrokeKind::Inside,
        );
    }
    inner.inner
}

fn more_info_button(ui: &mut egui::Ui) -> bool {
    ui.add(
        egui::Button::new(egui::RichText::new("More Info").color(ACCENT))
            .frame(false),
    )
    .clicked()
}

/// `progress` runs 0..=1 over the entrance animation.
pub fn hero(ui: &mut egui::Ui, cx: &SectionCtx<'_>, profile: &Profile, progress: f32) -> egui::Rect {
    centered_column(ui, 900.0, |ui| {
        ui.add_space(120.0 - 20.0 * (1.0 - progress));
        ui.vertical_centered(|ui| {
            ui.set_opacity(progress);
            let mut job = egui::text::LayoutJob::default();
            let heading = |color| egui::TextFormat {
                font_id: egui::FontId::proportional(46.0),
                color,
                ..Default::default()
            };
            job.append("Hi, I'm ", 0.0, heading(cx.palette.text));
            job.append(&profile.name, 0.0, heading(ACCENT));
            ui.label(job);
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(profile.headline())
                    .size(20.0)
                    .color(cx.palette.muted_text),
            );
            ui.add_space(24.0);
            if ui.add(pill_button(&profile.call_to_action)).clicked() {
                cx.dispatch(UiAction::NavigateTo(Section::Contact));
            }
        });
        ui.add_space(120.0);
    })
}

pub fn about(ui: &mut egui::Ui, cx: &SectionCtx<'_>, profile: &Profile) -> egui::Rect {
    centered_column(ui, 900.0, |ui| {
        section_heading(ui, cx.palette, "About Me");
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&profile.about)
                    .size(17.0)
                    .color(cx.palette.body_text),
            );
        });
    })
}

pub fn projects(ui: &mut egui::Ui, cx: &SectionCtx<'_>, projects: &[Project]) -> egui::Rect {
    centered_column(ui, 1100.0, |ui| {
        section_heading(ui, cx.palette, "Projects");
        let columns = match ui.available_width() {
            w if w >= 1000.0 => 3,
            w if w >= 640.0 => 2,
            _ => 1,
        };
        for row in projects.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, project) in cols.iter_mut().zip(row) {
                    card(col, cx.palette, |ui| project_card(ui, cx.palette, project));
                }
            });
            ui.add_space(16.0);
        }
    })
}

fn project_card(ui: &mut egui::Ui, palette: &Palette, project: &Project) {
    ui.label(
        egui::RichText::new(&project.title)
            .size(19.0)
            .strong()
            .color(palette.text),
    );
    ui.label(egui::RichText::new(&project.description).color(palette.muted_text));
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for tech in &project.stack {
            egui::Frame::NONE
                .fill(palette.chip_fill)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(tech).size(11.0).color(palette.chip_text));
                });
        }
    });
}

pub fn experience(
    ui: &mut egui::Ui,
    cx: &SectionCtx<'_>,
    entries: &[ExperienceEntry],
) -> egui::Rect {
    centered_column(ui, 1100.0, |ui| {
        section_heading(ui, cx.palette, "Experience");
        for entry in entries {
            let clicked = card(ui, cx.palette, |ui| {
                ui.label(egui::RichText::new(entry.heading()).size(18.0).strong().color(ACCENT));
                ui.label(egui::RichText::new(&entry.date).size(13.0).color(cx.palette.muted_text));
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&entry.description).color(cx.palette.body_text));
                ui.add_space(8.0);
                more_info_button(ui)
            });
            if clicked {
                cx.dispatch(UiAction::OpenDetail(ModalDetail::Experience(entry.clone())));
            }
            ui.add_space(20.0);
        }
    })
}

pub fn education(ui: &mut egui::Ui, cx: &SectionCtx<'_>, entries: &[EducationEntry]) -> egui::Rect {
    centered_column(ui, 1100.0, |ui| {
        section_heading(ui, cx.palette, "Education");
        for entry in entries {
            let clicked = card(ui, cx.palette, |ui| {
                ui.label(egui::RichText::new(&entry.title).size(18.0).strong().color(ACCENT));
                ui.label(egui::RichText::new(entry.subtitle()).size(13.0).color(cx.palette.muted_text));
                if let Some(note) = entry.note.as_deref().filter(|n| !n.is_empty()) {
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(note).color(cx.palette.body_text));
                }
                ui.add_space(8.0);
                more_info_button(ui)
            });
            if clicked {
                cx.dispatch(UiAction::OpenDetail(ModalDetail::Education(entry.clone())));
            }
            ui.add_space(20.0);
        }
    })
}

/// Horizontal offset and opacity of the entering slide.
pub fn slide_offset(transition: SlideTransition, progress: f32) -> (f32, f32) {
    let progress = progress.clamp(0.0, 1.0);
    let offset = transition.direction.enter_sign() * SLIDE_DISTANCE * (1.0 - progress);
    (offset, progress)
}

pub fn testimonials(
    ui: &mut egui::Ui,
    cx: &SectionCtx<'_>,
    carousel: &Carousel<TestimonialRecord>,
    progress: f32,
) -> egui::Rect {
    centered_column(ui, 760.0, |ui| {
        let record = carousel.current();
        let (offset, opacity) = slide_offset(carousel.transition(), progress);
        let width = (ui.available_width() - 2.0 * SLIDE_DISTANCE).max(160.0);

        ui.horizontal(|ui| {
            ui.add_space(SLIDE_DISTANCE + offset);
            ui.vertical(|ui| {
                ui.set_width(width);
                ui.set_opacity(opacity);
                card(ui, cx.palette, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(&record.avatar).size(36.0));
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(format!("“{}”", record.quote))
                                .italics()
                                .size(17.0)
                                .color(cx.palette.body_text),
                        );
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(record.name_or_empty())
                                .strong()
                                .size(13.0)
                                .color(cx.palette.testimonial_name),
                        );
                        ui.label(
                            egui::RichText::new(record.role_or_empty())
                                .size(11.0)
                                .color(cx.palette.muted_text),
                        );
                    });
                });
            });
        });

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            let nav_button = |text: &str| {
                egui::Button::new(egui::RichText::new(text.to_string()).color(ACCENT)).frame(false)
            };
            if ui.add(nav_button("← Previous")).clicked() {
                cx.dispatch(UiAction::PreviousTestimonial);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(nav_button("Next →")).clicked() {
                    cx.dispatch(UiAction::NextTestimonial);
                }
            });
        });
    })
}

pub fn contact(ui: &mut egui::Ui, cx: &SectionCtx<'_>, contact: &ContactInfo) -> egui::Rect {
    centered_column(ui, 640.0, |ui| {
        section_heading(ui, cx.palette, "Let's Connect");
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&contact.pitch).color(cx.palette.muted_text));
            ui.add_space(18.0);
            if ui.add(pill_button("Contact Me")).clicked() {
                tracing::info!(link = %contact.messaging, "opening messaging link");
                ui.ctx().open_url(egui::OpenUrl::new_tab(&contact.messaging));
            }
            ui.add_space(18.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("Or email me at").color(cx.palette.muted_text));
                let address = contact.email.trim_start_matches("mailto:");
                ui.hyperlink_to(address, &contact.email);
            });
        });
        ui.add_space(80.0);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::SlideDirection;

    #[test]
    fn forward_slide_enters_from_the_right() {
        let transition = SlideTransition {
            key: 1,
            direction: SlideDirection::Forward,
        };
        assert_eq!(slide_offset(transition, 0.0), (SLIDE_DISTANCE, 0.0));
        assert_eq!(slide_offset(transition, 1.0), (0.0, 1.0));
    }

    #[test]
    fn backward_slide_enters_from_the_left_and_clamps() {
        let transition = SlideTransition {
            key: 0,
            direction: SlideDirection::Backward,
        };
        let (offset, opacity) = slide_offset(transition, -3.0);
        assert_eq!(offset, -SLIDE_DISTANCE);
        assert_eq!(opacity, 0.0);
        assert_eq!(slide_offset(transition, 7.0), (0.0, 1.0));
    }
}
