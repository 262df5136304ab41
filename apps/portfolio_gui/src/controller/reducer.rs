//! Page state and the transitions applied to it, one action at a time.

use std::time::{Duration, Instant};

use portfolio_core::{
    Carousel, ContentError, MobileMenu, Modal, ModalDetail, PortfolioContent, PreferenceStore,
    Section, SplashTimer, TestimonialRecord, ThemeController,
};

use crate::controller::events::UiAction;

pub struct PageState<S> {
    pub content: PortfolioContent,
    pub carousel: Carousel<TestimonialRecord>,
    pub theme: ThemeController<S>,
    pub modal: Modal<ModalDetail>,
    pub menu: MobileMenu,
    pub splash: SplashTimer,
    /// Section the page should bring into view on the next frame.
    pub scroll_request: Option<Section>,
}

impl<S: PreferenceStore> PageState<S> {
    pub fn new(
        content: PortfolioContent,
        store: S,
        started_at: Instant,
        splash_delay: Duration,
    ) -> Result<Self, ContentError> {
        let carousel = Carousel::new(content.testimonials.clone())?;
        Ok(Self {
            content,
            carousel,
            theme: ThemeController::initialize(store),
            modal: Modal::new(),
            menu: MobileMenu::default(),
            splash: SplashTimer::start(started_at, splash_delay),
            scroll_request: None,
        })
    }

    pub fn take_scroll_request(&mut self) -> Option<Section> {
        self.scroll_request.take()
    }
}

pub fn apply<S: PreferenceStore>(state: &mut PageState<S>, action: UiAction) {
    match action {
        UiAction::NextTestimonial => state.carousel.next(),
        UiAction::PreviousTestimonial => state.carousel.previous(),
        UiAction::ToggleTheme => {
            state.theme.toggle();
        }
        UiAction::OpenDetail(detail) => state.modal.open(detail),
        UiAction::CloseDetail => state.modal.close(),
        UiAction::ToggleMobileMenu => state.menu.toggle(),
        UiAction::NavigateTo(section) => {
            state.scroll_request = Some(state.menu.select(section));
        }
        UiAction::ScrollToTop => state.scroll_request = Some(Section::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{MemoryStore, ThemePreference, THEME_STORAGE_KEY};

    fn page() -> PageState<MemoryStore> {
        PageState::new(
            PortfolioContent::builtin(),
            MemoryStore::new(),
            Instant::now(),
            Duration::from_millis(2000),
        )
        .expect("builtin content")
    }

    #[test]
    fn empty_testimonials_fail_page_construction() {
        let mut content = PortfolioContent::builtin();
        content.testimonials.clear();
        let result = PageState::new(
            content,
            MemoryStore::new(),
            Instant::now(),
            Duration::ZERO,
        );
        assert!(matches!(result, Err(ContentError::EmptyCarousel)));
    }

    #[test]
    fn carousel_actions_apply_in_order() {
        let mut state = page();
        for action in [
            UiAction::NextTestimonial,
            UiAction::NextTestimonial,
            UiAction::NextTestimonial,
            UiAction::PreviousTestimonial,
        ] {
            apply(&mut state, action);
        }
        assert_eq!(state.carousel.index(), 2);
    }

    #[test]
    fn toggle_theme_writes_through() {
        let mut state = page();
        apply(&mut state, UiAction::ToggleTheme);
        assert_eq!(state.theme.current(), ThemePreference::Dark);
        assert_eq!(state.theme.store().raw(THEME_STORAGE_KEY), Some("dark"));
    }

    #[test]
    fn detail_modal_replaces_then_closes() {
        let mut state = page();
        let first = ModalDetail::Experience(state.content.experience[0].clone());
        let second = ModalDetail::Education(state.content.education[0].clone());
        apply(&mut state, UiAction::OpenDetail(first));
        apply(&mut state, UiAction::OpenDetail(second.clone()));
        assert_eq!(state.modal.selected(), Some(&second));
        apply(&mut state, UiAction::CloseDetail);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn navigating_closes_menu_and_requests_scroll() {
        let mut state = page();
        apply(&mut state, UiAction::ToggleMobileMenu);
        assert!(state.menu.is_open());
        apply(&mut state, UiAction::NavigateTo(Section::Education));
        assert!(!state.menu.is_open());
        assert_eq!(state.take_scroll_request(), Some(Section::Education));
        assert_eq!(state.take_scroll_request(), None);

        apply(&mut state, UiAction::ScrollToTop);
        assert_eq!(state.take_scroll_request(), Some(Section::Home));
    }
}
