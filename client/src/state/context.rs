//! Leptos context carrying the preference store to every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `PreferenceContext`; any descendant calls
//! `use_preferences()` to read the snapshot or request a change. The context
//! subscribes to the store once and mirrors pushed snapshots into a single
//! signal, so all consumers share one derivation per mutation.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::preferences::{LanguageCode, PreferenceError, PreferenceState, PreferenceStore, ThemeMode};

/// Read accessors and mutators exposed to views.
#[derive(Clone, Debug)]
pub struct PreferenceContext {
    store: PreferenceStore,
    snapshot: ReadSignal<PreferenceState>,
}

impl PreferenceContext {
    /// Bridge `store` into a signal owned by the current reactive owner.
    ///
    /// The store subscription is released when that owner is cleaned up.
    pub fn new(store: PreferenceStore) -> Self {
        let (snapshot, set_snapshot) = signal(store.snapshot());
        let id = store.subscribe(move |next| {
            let _ = set_snapshot.try_set(next);
        });
        let cleanup_store = store.clone();
        on_cleanup(move || {
            cleanup_store.unsubscribe(id);
        });
        Self { store, snapshot }
    }

    /// Current snapshot, tracked when read inside a reactive scope.
    pub fn snapshot(&self) -> PreferenceState {
        self.snapshot.get()
    }

    pub fn snapshot_untracked(&self) -> PreferenceState {
        self.snapshot.get_untracked()
    }

    pub fn theme(&self) -> Signal<ThemeMode> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get().theme)
    }

    pub fn language(&self) -> Signal<LanguageCode> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get().language)
    }

    pub fn toggle_theme(&self) -> PreferenceState {
        self.store.toggle_theme()
    }

    pub fn set_language(&self, code: LanguageCode) -> PreferenceState {
        self.store.set_language_code(code)
    }

    /// Select a language from its storage tag.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::InvalidArgument`] for unknown tags.
    pub fn set_language_tag(&self, code: &str) -> Result<PreferenceState, PreferenceError> {
        self.store.set_language(code)
    }
}

/// Create the context for `store` and provide it to descendants.
pub fn provide_preferences(store: PreferenceStore) -> PreferenceContext {
    let ctx = PreferenceContext::new(store);
    provide_context(ctx.clone());
    ctx
}

/// Preference context provided by an ancestor.
///
/// # Panics
///
/// Panics when called outside a tree set up with [`provide_preferences`].
pub fn use_preferences() -> PreferenceContext {
    expect_context::<PreferenceContext>()
}
