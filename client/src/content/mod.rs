//! Static bilingual copy for the layout shell and every page.
//!
//! DESIGN
//! ======
//! Each table is a `Localized<T>` holding one value per supported language,
//! so adding a field forces both translations at compile time.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub mod about;
pub mod certificates;
pub mod experience;
pub mod home;
pub mod projects;

use crate::state::preferences::{LanguageCode, ThemeMode};

/// One value per supported language.
#[derive(Debug)]
pub struct Localized<T> {
    pub en: T,
    pub tr: T,
}

impl<T> Localized<T> {
    #[must_use]
    pub const fn get(&self, language: LanguageCode) -> &T {
        match language {
            LanguageCode::En => &self.en,
            LanguageCode::Tr => &self.tr,
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Top-level site sections, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Certificates,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Projects, Self::Experience, Self::Certificates];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Experience => "/experience",
            Self::Certificates => "/certificates",
        }
    }

    #[must_use]
    pub const fn label(self, language: LanguageCode) -> &'static str {
        match (self, language) {
            (Self::Home, LanguageCode::En) => "Home",
            (Self::Home, LanguageCode::Tr) => "Ana Sayfa",
            (Self::About, LanguageCode::En) => "About",
            (Self::About, LanguageCode::Tr) => "Hakkımda",
            (Self::Projects, LanguageCode::En) => "Projects",
            (Self::Projects, LanguageCode::Tr) => "Projeler",
            (Self::Experience, LanguageCode::En) => "Experience",
            (Self::Experience, LanguageCode::Tr) => "Deneyim",
            (Self::Certificates, LanguageCode::En) => "Certificates",
            (Self::Certificates, LanguageCode::Tr) => "Sertifikalar",
        }
    }

    /// Whether `pathname` belongs to this section. Home matches exactly.
    #[must_use]
    pub fn is_active(self, pathname: &str) -> bool {
        let path = self.path();
        match self {
            Self::Home => pathname == path,
            _ => pathname == path || pathname.strip_prefix(path).is_some_and(|rest| rest.starts_with('/')),
        }
    }
}

// =============================================================================
// SHELL
// =============================================================================

#[derive(Debug)]
pub struct ShellCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub profile_alt: &'static str,
    pub built_with: &'static str,
    pub not_found: &'static str,
    pub to_light: &'static str,
    pub to_dark: &'static str,
}

pub static SHELL: Localized<ShellCopy> = Localized {
    en: ShellCopy {
        title: "Semih Biçer",
        subtitle: "Game Developer & Computer Engineer",
        tagline: "Building polished interactive experiences with clean, scalable systems.",
        profile_alt: "Semih Biçer profile",
        built_with: "Built with Rust & Leptos.",
        not_found: "Page not found.",
        to_light: "Light Mode",
        to_dark: "Dark Mode",
    },
    tr: ShellCopy {
        title: "Semih Biçer",
        subtitle: "Oyun Geliştiricisi & Bilgisayar Mühendisi",
        tagline: "Ölçeklenebilir, temiz sistemlerle kusursuz etkileşimli deneyimler tasarlıyorum.",
        profile_alt: "Semih Biçer profil fotoğrafı",
        built_with: "Rust & Leptos ile geliştirildi.",
        not_found: "Sayfa bulunamadı.",
        to_light: "Aydınlık Tema",
        to_dark: "Koyu Tema",
    },
};

/// Label of the theme button: names the theme it switches to.
#[must_use]
pub fn theme_toggle_label(theme: ThemeMode, language: LanguageCode) -> &'static str {
    let shell = SHELL.get(language);
    match theme {
        ThemeMode::Dark => shell.to_light,
        ThemeMode::Light => shell.to_dark,
    }
}

/// Icon shown next to the theme button label.
#[must_use]
pub const fn theme_icon(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => "\u{1f319}",
        ThemeMode::Light => "\u{2600}\u{fe0f}",
    }
}

/// Profile photo served from the site root.
pub const PROFILE_IMAGE: &str = "/Cv_foto2.jpg";
