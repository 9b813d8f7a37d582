//! Site chrome: profile sidebar, header controls, footer.
//!
//! The shell is the only view that switches classes per theme in Rust; page
//! bodies rely on `dark:` variants keyed off the root marker.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::palette::Palette;
use crate::content::{PROFILE_IMAGE, SHELL, Section, theme_icon, theme_toggle_label};
use crate::state::context::use_preferences;
use crate::state::preferences::LanguageCode;

/// Layout wrapping the routed page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let theme = use_preferences().theme();
    let palette = Memo::new(move |_| Palette::for_theme(theme.get()));

    view! {
        <div class=move || format!("transition-colors duration-300 {}", palette.get().background)>
            <div class="mx-auto flex min-h-screen max-w-[1440px]">
                <Sidebar palette=palette/>
                <div class="flex min-h-screen flex-1 flex-col">
                    <Header palette=palette/>
                    <main class="flex-1 overflow-y-auto px-6 py-10 md:px-10">{children()}</main>
                    <Footer palette=palette/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Sidebar(palette: Memo<Palette>) -> impl IntoView {
    let language = use_preferences().language();
    let shell = move || SHELL.get(language.get());
    let subtle = move |extra: &str| format!("{extra} {}", palette.get().profile_subtle);

    view! {
        <aside class=move || {
            format!(
                "hidden w-full max-w-xs flex-col border-r px-8 py-10 md:flex lg:max-w-sm {}",
                palette.get().aside,
            )
        }>
            <div class="flex flex-col items-center gap-5 text-center">
                <img
                    src=PROFILE_IMAGE
                    alt=move || shell().profile_alt
                    class="h-32 w-32 rounded-full border-4 border-blue-500 object-cover shadow-lg"
                />
                <div>
                    <h1 class="text-2xl font-bold">{move || shell().title}</h1>
                    <p class=move || subtle("text-sm font-medium")>{move || shell().subtitle}</p>
                </div>
                <p class=move || subtle("text-sm leading-6")>{move || shell().tagline}</p>
            </div>
            <NavLinks
                palette=palette
                nav_class="mt-10 flex flex-col gap-2 text-sm font-medium"
                item_class="flex items-center gap-3 rounded-full px-5 py-2.5 transition-all"
            />
        </aside>
    }
}

#[component]
fn Header(palette: Memo<Palette>) -> impl IntoView {
    let prefs = use_preferences();
    let theme = prefs.theme();
    let language = prefs.language();
    let shell = move || SHELL.get(language.get());
    let subtle = move |extra: &str| format!("{extra} {}", palette.get().profile_subtle);

    let on_toggle_theme = {
        let prefs = prefs.clone();
        move |_| {
            prefs.toggle_theme();
        }
    };

    view! {
        <header class=move || format!("border-b px-6 py-6 {}", palette.get().header)>
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div>
                    <div class="md:hidden">
                        <h1 class="text-2xl font-bold">{move || shell().title}</h1>
                        <p class=move || subtle("text-sm font-medium")>{move || shell().subtitle}</p>
                    </div>
                    <div class="hidden md:block">
                        <p class="text-xs uppercase tracking-[0.35em] text-blue-500">{move || shell().subtitle}</p>
                        <h2 class="mt-1 text-lg font-semibold">{move || shell().tagline}</h2>
                    </div>
                </div>
                <div class="flex flex-wrap items-center gap-3 md:justify-end">
                    <button
                        type="button"
                        on:click=on_toggle_theme
                        class=move || {
                            format!(
                                "flex items-center gap-2 rounded-full px-4 py-2 text-sm font-semibold transition {}",
                                palette.get().theme_button,
                            )
                        }
                    >
                        <span role="img" aria-hidden="true">{move || theme_icon(theme.get())}</span>
                        {move || theme_toggle_label(theme.get(), language.get())}
                    </button>
                    <div class=move || {
                        format!(
                            "flex items-center gap-1 rounded-full border p-1 text-sm font-semibold transition {}",
                            palette.get().language_base,
                        )
                    }>
                        {LanguageCode::ALL
                            .into_iter()
                            .map(|code| {
                                let prefs = prefs.clone();
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            prefs.set_language(code);
                                        }
                                        class=move || {
                                            format!(
                                                "rounded-full px-3 py-1 transition {}",
                                                palette.get().language_button(language.get() == code),
                                            )
                                        }
                                    >
                                        {code.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <NavLinks
                palette=palette
                nav_class="mt-4 flex flex-wrap gap-2 md:hidden"
                item_class="rounded-full px-4 py-2 text-sm font-medium transition"
            />
        </header>
    }
}

/// Section links; the link for the current route gets the active classes.
#[component]
fn NavLinks(palette: Memo<Palette>, nav_class: &'static str, item_class: &'static str) -> impl IntoView {
    let language = use_preferences().language();
    let pathname = use_location().pathname;

    view! {
        <nav class=nav_class>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let active = move || pathname.with(|path| section.is_active(path));
                    view! {
                        <a
                            href=section.path()
                            class=move || format!("{item_class} {}", palette.get().nav_link(active()))
                        >
                            <span>{move || section.label(language.get())}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn Footer(palette: Memo<Palette>) -> impl IntoView {
    let language = use_preferences().language();
    let year = current_year().map(|y| format!("{y} ")).unwrap_or_default();

    view! {
        <footer class=move || format!("border-t px-6 py-6 text-sm {}", palette.get().footer)>
            {move || {
                let shell = SHELL.get(language.get());
                format!("\u{a9} {year}{}. {}", shell.title, shell.built_with)
            }}
        </footer>
    }
}

/// Calendar year from the host clock; `None` outside the browser build.
fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
