//! Theme binding for the browser.
//!
//! The root component owns a [`ThemeState`] backed by `localStorage`. Views
//! read the current theme through [`ThemeContext::theme`] and change it only
//! through [`ThemeContext::toggle`].

use folio_core::{PreferenceStore, ThemePreference, ThemeState};
use leptos::prelude::*;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Preference store over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, theme not persisted");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to persist theme: {err:?}");
        }
    }
}

/// Whether the OS asks for a dark color scheme, if the browser can tell.
pub fn os_prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// Read-only theme handle shared with every view.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<ThemePreference>,
    pub toggle: Callback<()>,
}

/// Create the theme state and provide it as context.
pub fn provide_theme() -> ThemeContext {
    let state = StoredValue::new(ThemeState::init(BrowserStore, os_prefers_dark()));
    let (theme, set_theme) = signal(state.with_value(ThemeState::current));

    let toggle = Callback::new(move |()| {
        if let Some(next) = state.try_update_value(|state| state.toggle()) {
            log::debug!("theme switched to {next}");
            set_theme.set(next);
        }
    });

    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(root) = document().document_element() {
            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to set data-theme: {err:?}");
            }
        }
    });

    let context = ThemeContext {
        theme: theme.into(),
        toggle,
    };
    provide_context(context);
    context
}

/// Theme context provided by the root component.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
