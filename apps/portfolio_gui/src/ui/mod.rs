//! UI layer: app shell, page sections, particle background and theme colors.

pub mod app;
pub mod particles;
pub mod sections;
pub mod theme;

pub use app::{load_content, AppPaths, PortfolioApp, StartupConfig};
