//! Light/dark theme preference.
//!
//! The preference is resolved once at startup (stored value, then OS
//! preference, then light) and changed only through [`ThemeState::set`].

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Color scheme of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but "light" or "dark" is ignored.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the initial theme: stored preference, then OS preference, then light.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(Self::from_stored) {
            return theme;
        }
        match os_prefers_dark {
            Some(true) => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value storage backing the theme preference.
pub trait PreferenceStore {
    /// Read a stored value.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value. Failures are the store's to report.
    fn store(&mut self, key: &str, value: &str);
}

/// In-memory store; values live only as long as the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one value.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.store(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Owned theme state with write-through persistence.
#[derive(Debug, Clone)]
pub struct ThemeState<S> {
    store: S,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Seed the state from `store`, falling back to the OS preference.
    pub fn init(store: S, os_prefers_dark: Option<bool>) -> Self {
        let stored = store.load(THEME_STORAGE_KEY);
        let current = ThemePreference::resolve(stored.as_deref(), os_prefers_dark);
        tracing::debug!(theme = %current, stored = stored.is_some(), "theme initialized");
        Self { store, current }
    }

    /// Current theme.
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Set the theme and persist it synchronously.
    pub fn set(&mut self, theme: ThemePreference) {
        self.current = theme;
        self.store.store(THEME_STORAGE_KEY, theme.as_str());
    }

    /// Flip the theme, returning the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stored_wins() {
        assert_eq!(
            ThemePreference::resolve(Some("dark"), Some(false)),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::resolve(Some("light"), Some(true)),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_resolve_falls_back_to_os() {
        assert_eq!(ThemePreference::resolve(None, Some(true)), ThemePreference::Dark);
        assert_eq!(
            ThemePreference::resolve(Some("sepia"), Some(true)),
            ThemePreference::Dark
        );
        assert_eq!(ThemePreference::resolve(None, None), ThemePreference::Light);
    }

    #[test]
    fn test_stored_dark_ignores_os() {
        let state = ThemeState::init(MemoryStore::with(THEME_STORAGE_KEY, "dark"), Some(false));
        assert_eq!(state.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut state = ThemeState::init(MemoryStore::new(), None);
        assert_eq!(state.current(), ThemePreference::Light);
        assert!(state.store().load(THEME_STORAGE_KEY).is_none());

        assert_eq!(state.toggle(), ThemePreference::Dark);
        assert_eq!(state.store().load(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(state.toggle(), ThemePreference::Light);
        assert_eq!(state.store().load(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
