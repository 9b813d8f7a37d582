use super::*;

#[test]
fn headless_reports_every_signal_unavailable() {
    let env = HeadlessEnvironment;
    assert_eq!(env.read_persisted("theme"), None);
    assert_eq!(env.prefers_dark_scheme(), None);
    assert!(matches!(
        env.write_persisted("theme", "dark"),
        Err(PreferenceError::PersistenceUnavailable(_))
    ));
    env.apply_theme(ThemeMode::Dark);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_environment_degrades_outside_csr_build() {
    let env = BrowserEnvironment;
    assert_eq!(env.read_persisted("theme"), None);
    assert_eq!(env.prefers_dark_scheme(), None);
    assert!(env.write_persisted("theme", "dark").is_err());
    env.apply_theme(ThemeMode::Light);
}

#[test]
fn memory_environment_stores_and_reads_values() {
    let env = MemoryEnvironment::new();
    assert_eq!(env.read_persisted("language"), None);
    env.write_persisted("language", "tr").unwrap();
    assert_eq!(env.read_persisted("language").as_deref(), Some("tr"));
    assert_eq!(env.write_count(), 1);
}

#[test]
fn memory_environment_failing_writes_leave_values_untouched() {
    let env = MemoryEnvironment::new().with_value("theme", "light");
    env.set_fail_writes(true);
    assert!(env.write_persisted("theme", "dark").is_err());
    assert_eq!(env.value("theme").as_deref(), Some("light"));
    assert_eq!(env.write_count(), 0);

    env.set_fail_writes(false);
    env.write_persisted("theme", "dark").unwrap();
    assert_eq!(env.value("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_environment_reports_scripted_dark_preference() {
    assert_eq!(MemoryEnvironment::new().prefers_dark_scheme(), None);
    assert_eq!(MemoryEnvironment::new().with_dark_preference(true).prefers_dark_scheme(), Some(true));
    assert_eq!(MemoryEnvironment::new().with_dark_preference(false).prefers_dark_scheme(), Some(false));
}

#[test]
fn memory_environment_records_applied_theme() {
    let env = MemoryEnvironment::new();
    assert_eq!(env.applied_theme(), None);
    env.apply_theme(ThemeMode::Dark);
    env.apply_theme(ThemeMode::Light);
    assert_eq!(env.applied_theme(), Some(ThemeMode::Light));
}
