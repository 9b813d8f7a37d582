//! Tailwind class sets for the layout shell, one per theme.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::state::preferences::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub aside: &'static str,
    pub header: &'static str,
    pub footer: &'static str,
    pub link_base: &'static str,
    pub link_idle: &'static str,
    pub link_active: &'static str,
    pub profile_subtle: &'static str,
    pub language_base: &'static str,
    pub language_active: &'static str,
    pub language_idle: &'static str,
    pub theme_button: &'static str,
}

const DARK: Palette = Palette {
    background: "bg-slate-950 text-slate-100",
    aside: "bg-slate-900/70 border-slate-800/70",
    header: "bg-slate-900/60 border-slate-800/80",
    footer: "bg-slate-900/60 border-slate-800/80 text-slate-400",
    link_base: "border border-transparent",
    link_idle: "text-slate-300 hover:text-white",
    link_active: "border-blue-400 bg-blue-500/20 text-blue-200 shadow-none",
    profile_subtle: "text-slate-400",
    language_base: "border-slate-700 bg-slate-900/60",
    language_active: "bg-blue-500 text-white shadow-lg shadow-blue-700/20",
    language_idle: "text-slate-300 hover:text-white",
    theme_button: "border-slate-700 bg-slate-900/60 text-slate-200 hover:border-blue-400 hover:text-blue-200",
};

const LIGHT: Palette = Palette {
    background: "bg-gray-100 text-gray-900",
    aside: "bg-white border-gray-200",
    header: "bg-white/80 border-gray-200",
    footer: "bg-white border-gray-200 text-gray-500",
    link_base: "border border-transparent",
    link_idle: "text-gray-600 hover:text-blue-600",
    link_active: "border-blue-500 bg-blue-100 text-blue-600 shadow-sm",
    profile_subtle: "text-gray-500",
    language_base: "border-gray-200 bg-white",
    language_active: "bg-blue-500 text-white shadow-md",
    language_idle: "text-gray-500 hover:text-blue-600",
    theme_button: "border-gray-200 bg-white text-gray-600 hover:border-blue-500 hover:text-blue-600",
};

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }

    /// Classes for a navigation link in the given state.
    #[must_use]
    pub fn nav_link(&self, active: bool) -> String {
        let state = if active { self.link_active } else { self.link_idle };
        format!("{} {state}", self.link_base)
    }

    /// Classes for one button of the language switch.
    #[must_use]
    pub const fn language_button(&self, selected: bool) -> &'static str {
        if selected { self.language_active } else { self.language_idle }
    }
}
