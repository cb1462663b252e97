//! Light/dark theme preference
//!
//! The preference is read once at startup, mirrored onto `<html data-theme>`
//! and written back to storage. The OS color scheme is only followed while
//! the visitor has no explicit preference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::THEME_STORAGE_KEY;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than "light"/"dark" is rejected
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

/// Key-value store backing the persisted preference
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used on native targets and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Owns the active theme and its persistence
#[derive(Debug)]
pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: Theme,
    /// Whether the visitor has a preference of their own
    explicit: bool,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Load the stored preference (default light) and persist it back.
    ///
    /// The caller applies [`ThemeController::theme`] to the document.
    pub fn initialize(store: S) -> Self {
        let stored = store.get(THEME_STORAGE_KEY).and_then(|v| Theme::from_str(&v));
        let mut controller = Self {
            store,
            theme: stored.unwrap_or_default(),
            explicit: stored.is_some(),
        };
        controller.persist();
        log::info!(
            "Theme initialized: {} ({})",
            controller.theme.as_str(),
            if controller.explicit { "stored" } else { "default" }
        );
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme in response to the toggle control
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.explicit = true;
        self.persist();
        log::info!("Theme toggled to {}", self.theme.as_str());
        self.theme
    }

    /// Follow an OS color-scheme change unless the visitor chose a theme.
    ///
    /// Returns the theme to apply, or `None` when the change is ignored.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit {
            log::debug!("Ignoring OS scheme change, explicit preference set");
            return None;
        }
        self.theme = Theme::from_dark(prefers_dark);
        self.persist();
        log::info!("Theme follows OS scheme: {}", self.theme.as_str());
        Some(self.theme)
    }

    fn persist(&mut self) {
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initialize_defaults_to_light_and_persists() {
        let controller = ThemeController::initialize(MemoryStore::new());
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.is_explicit());
        assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_initialize_reads_stored_preference() {
        let controller =
            ThemeController::initialize(MemoryStore::with_item(THEME_STORAGE_KEY, "dark"));
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.is_explicit());
    }

    #[test]
    fn test_initialize_ignores_unknown_value() {
        let controller =
            ThemeController::initialize(MemoryStore::with_item(THEME_STORAGE_KEY, "sepia"));
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.is_explicit());
        assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut controller = ThemeController::initialize(MemoryStore::new());
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_os_change_followed_without_explicit_preference() {
        let mut controller = ThemeController::initialize(MemoryStore::new());
        assert_eq!(controller.system_scheme_changed(true), Some(Theme::Dark));
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.system_scheme_changed(false), Some(Theme::Light));
        assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_os_change_ignored_after_toggle() {
        let mut controller = ThemeController::initialize(MemoryStore::new());
        controller.toggle();
        assert_eq!(controller.system_scheme_changed(false), None);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.system_scheme_changed(true), None);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_os_change_ignored_with_stored_preference() {
        let mut controller =
            ThemeController::initialize(MemoryStore::with_item(THEME_STORAGE_KEY, "light"));
        assert_eq!(controller.system_scheme_changed(true), None);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(start_dark in any::<bool>(), os_changes in prop::collection::vec(any::<bool>(), 0..4)) {
            let store = MemoryStore::with_item(THEME_STORAGE_KEY, Theme::from_dark(start_dark).as_str());
            let mut controller = ThemeController::initialize(store);
            for dark in os_changes {
                controller.system_scheme_changed(dark);
            }
            let before = controller.theme();
            controller.toggle();
            controller.toggle();
            prop_assert_eq!(controller.theme(), before);
            prop_assert_eq!(controller.store().get(THEME_STORAGE_KEY), Some(before.as_str().to_string()));
        }
    }
}
