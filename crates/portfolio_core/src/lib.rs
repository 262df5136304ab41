//! Toolkit-free state for the portfolio: content records and the small
//! controllers the page is driven by (carousel, theme, scroll flags, modal,
//! splash timer, navigation).

pub mod carousel;
pub mod content;
pub mod error;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod paths;
pub mod prefs;
pub mod scroll;
pub mod splash;
pub mod theme;

pub use carousel::{Carousel, SlideDirection, SlideTransition};
pub use content::{
    ContactInfo, EducationEntry, ExperienceEntry, ModalDetail, PortfolioContent, Profile, Project,
    TestimonialRecord,
};
pub use error::{ContentError, PreferenceError};
pub use modal::Modal;
pub use nav::{is_compact, MobileMenu, Section, COMPACT_NAV_WIDTH};
pub use particles::{HoverMode, Particle, ParticleConfig, ParticleField, Rgb};
pub use paths::{resolve_data_root, DATA_DIR_ENV, PREFERENCES_FILE};
pub use prefs::{JsonFileStore, MemoryStore, PreferenceStore};
pub use scroll::{
    ScrollListener, ScrollSignal, ScrollVisibility, BACK_TO_TOP_THRESHOLD, NAV_SHADOW_THRESHOLD,
};
pub use splash::{SplashTimer, DEFAULT_SPLASH_DELAY};
pub use theme::{ThemeController, ThemePreference, THEME_STORAGE_KEY};
