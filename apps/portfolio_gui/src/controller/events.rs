//! Actions emitted by widgets during a frame.

use portfolio_core::{ModalDetail, Section};

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    NextTestimonial,
    PreviousTestimonial,
    ToggleTheme,
    OpenDetail(ModalDetail),
    CloseDetail,
    ToggleMobileMenu,
    NavigateTo(Section),
    ScrollToTop,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::NextTestimonial => "next_testimonial",
            UiAction::PreviousTestimonial => "previous_testimonial",
            UiAction::ToggleTheme => "toggle_theme",
            UiAction::OpenDetail(_) => "open_detail",
            UiAction::CloseDetail => "close_detail",
            UiAction::ToggleMobileMenu => "toggle_mobile_menu",
            UiAction::NavigateTo(_) => "navigate_to",
            UiAction::ScrollToTop => "scroll_to_top",
        }
    }
}
