//! Page sections and the compact-layout menu.

/// Viewport width (points) below which the navigation collapses.
pub const COMPACT_NAV_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Education,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Sections linked from the navigation bar, in page order.
    pub const NAVIGABLE: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }
}

pub fn is_compact(viewport_width: f32) -> bool {
    viewport_width < COMPACT_NAV_WIDTH
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Following a link from the menu closes it.
    pub fn select(&mut self, section: Section) -> Section {
        self.close();
        section
    }
}
