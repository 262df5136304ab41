//! Dark/light preference with write-through persistence.
//!
//! The in-memory value is authoritative for the session. Storage failures are
//! logged and otherwise ignored, so a blocked store only costs persistence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prefs::PreferenceStore;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Only the literal `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeController<S> {
    store: S,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn initialize(store: S) -> Self {
        let stored = match store.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unreadable; using light");
                None
            }
        };
        let current = ThemePreference::from_stored(stored.as_deref());
        tracing::debug!(theme = %current, "theme initialized");
        Self { store, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, preference: ThemePreference) -> ThemePreference {
        self.current = preference;
        self.persist();
        tracing::info!(theme = %preference, "theme changed");
        preference
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, self.current.as_str()) {
            tracing::warn!(error = %err, theme = %self.current, "theme preference not persisted");
        }
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
