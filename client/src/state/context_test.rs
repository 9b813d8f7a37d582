use super::*;

use std::sync::Arc;

use crate::util::environment::MemoryEnvironment;

fn memory_store(env: MemoryEnvironment) -> PreferenceStore {
    PreferenceStore::new(Arc::new(env))
}

#[test]
fn context_starts_from_store_snapshot() {
    let owner = Owner::new();
    owner.with(|| {
        let store = memory_store(MemoryEnvironment::new().with_dark_preference(true));
        let ctx = provide_preferences(store);
        assert_eq!(
            ctx.snapshot_untracked(),
            PreferenceState { theme: ThemeMode::Dark, language: LanguageCode::En }
        );
    });
}

#[test]
fn sibling_consumers_observe_identical_snapshots_after_mutation() {
    let owner = Owner::new();
    owner.with(|| {
        provide_preferences(memory_store(MemoryEnvironment::new()));

        let header = use_preferences();
        let page = use_preferences();

        header.toggle_theme();
        assert_eq!(header.snapshot_untracked(), page.snapshot_untracked());
        assert_eq!(page.theme().get_untracked(), ThemeMode::Dark);

        page.set_language(LanguageCode::Tr);
        assert_eq!(header.language().get_untracked(), LanguageCode::Tr);
        assert_eq!(header.snapshot_untracked(), page.snapshot_untracked());
    });
}

#[test]
fn mutations_made_directly_on_store_reach_context() {
    let owner = Owner::new();
    owner.with(|| {
        let store = memory_store(MemoryEnvironment::new());
        let ctx = provide_preferences(store.clone());

        store.set_language_code(LanguageCode::Tr);

        assert_eq!(ctx.snapshot_untracked().language, LanguageCode::Tr);
    });
}

#[test]
fn invalid_language_tag_is_rejected_through_context() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide_preferences(memory_store(MemoryEnvironment::new()));
        assert!(ctx.set_language_tag("fr").is_err());
        assert_eq!(ctx.snapshot_untracked().language, LanguageCode::En);
        assert!(ctx.set_language_tag("tr").is_ok());
        assert_eq!(ctx.snapshot_untracked().language, LanguageCode::Tr);
    });
}

#[test]
fn owner_cleanup_releases_store_subscription() {
    let store = memory_store(MemoryEnvironment::new());
    let owner = Owner::new();
    owner.with(|| {
        provide_preferences(store.clone());
    });
    assert_eq!(store.listener_count(), 1);

    owner.cleanup();

    assert_eq!(store.listener_count(), 0);
}
