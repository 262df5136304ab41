use std::time::{Duration, Instant};

use portfolio_core::{
    Carousel, JsonFileStore, Modal, ModalDetail, PortfolioContent, ScrollSignal, SplashTimer,
    ThemeController, ThemePreference, BACK_TO_TOP_THRESHOLD, NAV_SHADOW_THRESHOLD,
};

#[test]
fn visitor_session_across_two_launches() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs_path = dir.path().join("profile").join("preferences.json");
    let content = PortfolioContent::builtin();

    // first launch
    let started = Instant::now();
    let mut splash = SplashTimer::start(started, Duration::from_millis(2000));
    let mut theme = ThemeController::initialize(JsonFileStore::new(&prefs_path));
    let mut carousel = Carousel::new(content.testimonials.clone()).expect("testimonials");
    let mut modal = Modal::new();
    let scroll = ScrollSignal::new();
    let nav_shadow = scroll.subscribe(NAV_SHADOW_THRESHOLD);
    let back_to_top = scroll.subscribe(BACK_TO_TOP_THRESHOLD);

    assert!(splash.is_loading());
    assert!(splash.poll(started + Duration::from_secs(3)));
    assert_eq!(theme.current(), ThemePreference::Light);

    scroll.publish(420.0);
    assert!(nav_shadow.visible() && back_to_top.visible());

    carousel.previous();
    assert_eq!(carousel.current().name_or_empty(), "");
    carousel.next();
    carousel.next();
    assert_eq!(carousel.current().name_or_empty(), "XGRAFT");
    assert_eq!(carousel.current().role_or_empty(), "CEO, XGRAFT");

    modal.open(ModalDetail::Experience(content.experience[1].clone()));
    modal.open(ModalDetail::Education(content.education[3].clone()));
    assert_eq!(modal.selected().map(ModalDetail::body), Some(""));
    modal.close();
    assert!(!modal.is_open());

    theme.toggle();
    drop(nav_shadow);
    drop(back_to_top);
    assert_eq!(scroll.listener_count(), 0);
    drop(theme);

    // second launch picks up the stored preference; transient state resets
    let theme = ThemeController::initialize(JsonFileStore::new(&prefs_path));
    assert_eq!(theme.current(), ThemePreference::Dark);
    let carousel = Carousel::new(content.testimonials).expect("testimonials");
    assert_eq!(carousel.index(), 0);

    let raw = std::fs::read_to_string(&prefs_path).expect("prefs written");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(stored["theme"], "dark");
}
