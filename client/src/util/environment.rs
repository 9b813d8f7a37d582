//! Host capabilities consulted by the preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store never probes for a browser itself. It is handed an
//! `EnvironmentProvider`; the browser build uses `localStorage`,
//! `matchMedia` and the `<html>` class list, while tests and headless
//! builds get providers that report every signal as unavailable or keep
//! values in memory.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::state::preferences::{PreferenceError, ThemeMode};

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Storage, color-scheme signal and root presentation marker.
pub trait EnvironmentProvider: Send + Sync {
    /// Persisted value for `key`; `None` when absent or storage is unavailable.
    fn read_persisted(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::PersistenceUnavailable`] when the value
    /// could not be stored.
    fn write_persisted(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Whether the host prefers a dark color scheme; `None` without a signal.
    fn prefers_dark_scheme(&self) -> Option<bool>;

    /// Reflect `theme` on the root presentation context.
    fn apply_theme(&self, theme: ThemeMode);
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage` + `matchMedia` + `<html class="dark">`.
///
/// Outside the `csr` build every capability reports unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnvironment;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl EnvironmentProvider for BrowserEnvironment {
    fn read_persisted(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write_persisted(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()
                .ok_or_else(|| PreferenceError::PersistenceUnavailable("localStorage missing".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| PreferenceError::PersistenceUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(PreferenceError::PersistenceUnavailable("no browser environment".to_owned()))
        }
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        #[cfg(feature = "csr")]
        {
            web_sys::window()?
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn apply_theme(&self, theme: ThemeMode) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

// =============================================================================
// HEADLESS
// =============================================================================

/// Provider for contexts with no storage and no color-scheme signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessEnvironment;

impl EnvironmentProvider for HeadlessEnvironment {
    fn read_persisted(&self, _key: &str) -> Option<String> {
        None
    }

    fn write_persisted(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::PersistenceUnavailable("headless environment".to_owned()))
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        None
    }

    fn apply_theme(&self, _theme: ThemeMode) {}
}

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    fail_writes: bool,
    applied_theme: Option<ThemeMode>,
    writes: usize,
}

/// In-process provider with a scripted color-scheme signal.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    inner: Mutex<MemoryInner>,
    prefers_dark: Option<bool>,
}

impl MemoryEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `prefers_dark` as the host color-scheme signal.
    #[must_use]
    pub fn with_dark_preference(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = Some(prefers_dark);
        self
    }

    /// Seed a persisted value.
    #[must_use]
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.lock().values.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Stored value for `key`, bypassing the provider interface.
    pub fn value(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Last theme passed to `apply_theme`.
    pub fn applied_theme(&self) -> Option<ThemeMode> {
        self.lock().applied_theme
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EnvironmentProvider for MemoryEnvironment {
    fn read_persisted(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn write_persisted(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(PreferenceError::PersistenceUnavailable("quota exceeded".to_owned()));
        }
        inner.values.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn apply_theme(&self, theme: ThemeMode) {
        self.lock().applied_theme = Some(theme);
    }
}
