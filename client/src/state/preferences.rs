//! Theme and language preferences shared by every view.
//!
//! DESIGN
//! ======
//! `PreferenceStore` is the single owner of the `PreferenceState` value. It
//! resolves the initial state from an injected `EnvironmentProvider`, persists
//! every mutation best-effort, and pushes each new snapshot to registered
//! listeners before the mutating call returns.
//!
//! TRADE-OFFS
//! ==========
//! The browser runs one event at a time, but the store still keeps its state
//! behind an `RwLock`: Leptos context values must be `Send + Sync`, and the
//! lock makes every snapshot a whole copy. Listeners are invoked after the
//! guard is dropped so they can read the store again.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::util::environment::EnvironmentProvider;

/// Storage key holding the persisted theme tag.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Storage key holding the persisted language tag.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// A language tag outside the supported set was requested.
    #[error("unsupported language code: {value:?}")]
    InvalidArgument { value: String },

    /// The durable key-value store could not be read or written.
    #[error("preference storage unavailable: {0}")]
    PersistenceUnavailable(String),
}

// =============================================================================
// THEME / LANGUAGE
// =============================================================================

/// Light/dark presentation preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Tag written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other member of the enumeration.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| PreferenceError::InvalidArgument { value: s.to_owned() })
    }
}

/// Selected UI locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Tr,
}

impl LanguageCode {
    pub const ALL: [Self; 2] = [Self::En, Self::Tr];

    /// Tag written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Short uppercase label used by the language switch.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Tr => "TR",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| PreferenceError::InvalidArgument { value: s.to_owned() })
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Point-in-time copy of both preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceState {
    pub theme: ThemeMode,
    pub language: LanguageCode,
}

/// Handle returned by [`PreferenceStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(PreferenceState) + Send + Sync>;

struct StoreInner {
    state: PreferenceState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

// =============================================================================
// STORE
// =============================================================================

/// Owner of the session's preferences. Cloning yields another handle to the
/// same store.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<RwLock<StoreInner>>,
    env: Arc<dyn EnvironmentProvider>,
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Resolve the initial state and apply the root theme marker.
    ///
    /// Nothing is written to storage until the first mutation.
    pub fn new(env: Arc<dyn EnvironmentProvider>) -> Self {
        let state = Self::initialize(env.as_ref());
        env.apply_theme(state.theme);
        log::debug!("preferences initialized: theme={} language={}", state.theme, state.language);
        Self {
            inner: Arc::new(RwLock::new(StoreInner { state, listeners: Vec::new(), next_id: 0 })),
            env,
        }
    }

    /// Resolve both fields from persisted values, then environment signals,
    /// then hard-coded fallbacks. Reads only.
    pub fn initialize(env: &dyn EnvironmentProvider) -> PreferenceState {
        let theme = env
            .read_persisted(THEME_STORAGE_KEY)
            .and_then(|raw| raw.parse::<ThemeMode>().ok())
            .or_else(|| {
                env.prefers_dark_scheme()
                    .map(|dark| if dark { ThemeMode::Dark } else { ThemeMode::Light })
            })
            .unwrap_or_default();

        let language = env
            .read_persisted(LANGUAGE_STORAGE_KEY)
            .and_then(|raw| raw.parse::<LanguageCode>().ok())
            .unwrap_or_default();

        PreferenceState { theme, language }
    }

    /// Current state, read under the store lock.
    pub fn snapshot(&self) -> PreferenceState {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).state
    }

    /// Flip the theme, persist it, update the root marker and notify.
    pub fn toggle_theme(&self) -> PreferenceState {
        let (next, listeners) = self.mutate(|state| state.theme = state.theme.toggled());
        self.persist(THEME_STORAGE_KEY, next.theme.as_str());
        self.env.apply_theme(next.theme);
        Self::notify(&listeners, next);
        next
    }

    /// Parse `code` and select that language.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::InvalidArgument`] when `code` is not a
    /// supported tag. The stored state is left untouched in that case.
    pub fn set_language(&self, code: &str) -> Result<PreferenceState, PreferenceError> {
        let code = code.parse::<LanguageCode>()?;
        Ok(self.set_language_code(code))
    }

    /// Select `code`. Setting the current language still persists and
    /// notifies.
    pub fn set_language_code(&self, code: LanguageCode) -> PreferenceState {
        let (next, listeners) = self.mutate(|state| state.language = code);
        self.persist(LANGUAGE_STORAGE_KEY, next.language.as_str());
        Self::notify(&listeners, next);
        next
    }

    /// Register a listener invoked with every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(PreferenceState) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }

    fn mutate(&self, apply: impl FnOnce(&mut PreferenceState)) -> (PreferenceState, Vec<Listener>) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut inner.state);
        let listeners = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
        (inner.state, listeners)
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.env.write_persisted(key, value) {
            log::warn!("preference {key}={value} kept in memory only: {e}");
        }
    }

    fn notify(listeners: &[Listener], state: PreferenceState) {
        log::debug!("preferences changed: theme={} language={}", state.theme, state.language);
        for listener in listeners {
            listener(state);
        }
    }
}
