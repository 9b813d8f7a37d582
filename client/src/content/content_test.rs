use super::*;

use super::about::{ABOUT, CONFIDENCE_SCALE};
use super::certificates::{CERTIFICATES, CertificateStatus};
use super::experience::EXPERIENCE;
use super::home::HOME;
use super::projects::PROJECTS;

// =============================================================
// Localized / Section
// =============================================================

#[test]
fn localized_get_selects_language() {
    let table = Localized { en: "hello", tr: "merhaba" };
    assert_eq!(*table.get(LanguageCode::En), "hello");
    assert_eq!(*table.get(LanguageCode::Tr), "merhaba");
}

#[test]
fn section_paths_are_unique_and_rooted() {
    for (i, a) in Section::ALL.iter().enumerate() {
        assert!(a.path().starts_with('/'));
        for b in &Section::ALL[i + 1..] {
            assert_ne!(a.path(), b.path());
        }
    }
}

#[test]
fn section_labels_are_never_empty() {
    for section in Section::ALL {
        for language in LanguageCode::ALL {
            assert!(!section.label(language).is_empty());
        }
    }
    assert_eq!(Section::About.label(LanguageCode::Tr), "Hakkımda");
    assert_eq!(Section::Certificates.label(LanguageCode::En), "Certificates");
}

#[test]
fn home_section_matches_root_only() {
    assert!(Section::Home.is_active("/"));
    assert!(!Section::Home.is_active("/about"));
}

#[test]
fn nested_paths_activate_their_section() {
    assert!(Section::Projects.is_active("/projects"));
    assert!(Section::Projects.is_active("/projects/unity"));
    assert!(!Section::Projects.is_active("/projectsx"));
    assert!(!Section::About.is_active("/"));
}

// =============================================================
// Shell
// =============================================================

#[test]
fn theme_toggle_label_names_the_target_theme() {
    assert_eq!(theme_toggle_label(ThemeMode::Light, LanguageCode::En), "Dark Mode");
    assert_eq!(theme_toggle_label(ThemeMode::Dark, LanguageCode::En), "Light Mode");
    assert_eq!(theme_toggle_label(ThemeMode::Light, LanguageCode::Tr), "Koyu Tema");
    assert_eq!(theme_toggle_label(ThemeMode::Dark, LanguageCode::Tr), "Aydınlık Tema");
}

#[test]
fn theme_icons_differ() {
    assert_ne!(theme_icon(ThemeMode::Light), theme_icon(ThemeMode::Dark));
}

#[test]
fn shell_title_is_shared_across_languages() {
    assert_eq!(SHELL.en.title, SHELL.tr.title);
    assert_ne!(SHELL.en.subtitle, SHELL.tr.subtitle);
}

// =============================================================
// Pages: both languages carry the same structure
// =============================================================

#[test]
fn home_tables_align() {
    assert_eq!(HOME.en.hero_badges.len(), HOME.tr.hero_badges.len());
    assert_eq!(HOME.en.skill_pillars.len(), HOME.tr.skill_pillars.len());
    let targets = |copy: &home::HomeCopy| copy.highlight_cards.iter().map(|c| c.target).collect::<Vec<_>>();
    assert_eq!(targets(&HOME.en), targets(&HOME.tr));
    assert!(!targets(&HOME.en).contains(&Section::Home));
}

#[test]
fn about_tables_align_and_confidence_fits_scale() {
    assert_eq!(ABOUT.en.contact_info.len(), ABOUT.tr.contact_info.len());
    for (en, tr) in ABOUT.en.contact_info.iter().zip(ABOUT.tr.contact_info) {
        assert_eq!(en.href, tr.href);
        assert_eq!(en.value, tr.value);
    }
    for copy in [&ABOUT.en, &ABOUT.tr] {
        for level in copy.language_levels {
            assert!(level.confidence <= CONFIDENCE_SCALE);
        }
    }
}

#[test]
fn project_tables_align() {
    assert_eq!(PROJECTS.en.projects.len(), PROJECTS.tr.projects.len());
    for (en, tr) in PROJECTS.en.projects.iter().zip(PROJECTS.tr.projects) {
        assert_eq!(en.link, tr.link);
        assert_eq!(en.skills.len(), tr.skills.len());
    }
}

#[test]
fn experience_tables_align() {
    assert_eq!(EXPERIENCE.en.experiences.len(), EXPERIENCE.tr.experiences.len());
    assert_eq!(EXPERIENCE.en.callout_href, EXPERIENCE.tr.callout_href);
    for (en, tr) in EXPERIENCE.en.experiences.iter().zip(EXPERIENCE.tr.experiences) {
        assert_eq!(en.achievements.len(), tr.achievements.len());
    }
}

#[test]
fn certificate_tables_align() {
    assert_eq!(CERTIFICATES.en.certificates.len(), CERTIFICATES.tr.certificates.len());
    for (en, tr) in CERTIFICATES.en.certificates.iter().zip(CERTIFICATES.tr.certificates) {
        assert_eq!(en.status, tr.status);
        assert_eq!(en.credential_url, tr.credential_url);
    }
}

#[test]
fn certificate_status_labels_are_localized() {
    assert_eq!(CertificateStatus::Completed.label(LanguageCode::Tr), "Tamamlandı");
    assert_eq!(CertificateStatus::InProgress.label(LanguageCode::En), "In Progress");
}
