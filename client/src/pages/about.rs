//! About page: profile, contact details, education, languages, toolkit.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::content::about::{ABOUT, CONFIDENCE_SCALE, ContactItem, LanguageLevel};
use crate::state::context::use_preferences;

const PANEL: &str = "rounded-3xl bg-white p-8 shadow-xl dark:border dark:border-slate-800 dark:bg-slate-900/60 dark:shadow-none";
const HEADING: &str = "text-gray-900 dark:text-white";
const MUTED: &str = "text-gray-600 dark:text-slate-300";

/// Fill state of each meter segment for a `confidence` rating.
pub(crate) fn confidence_segments(confidence: u8) -> Vec<bool> {
    (0..CONFIDENCE_SCALE).map(|index| index < confidence).collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let language = use_preferences().language();

    move || {
        let copy = ABOUT.get(language.get());
        let education = &copy.education;

        view! {
            <div class="space-y-10">
                <section class="grid gap-8 md:grid-cols-[1.1fr_0.9fr]">
                    <div class=PANEL>
                        <h2 class=format!("text-2xl font-semibold {HEADING}")>{copy.profile_title}</h2>
                        {copy
                            .profile_paragraphs
                            .iter()
                            .map(|paragraph| view! { <p class=format!("mt-4 text-sm leading-6 {MUTED}")>{*paragraph}</p> })
                            .collect_view()}
                    </div>

                    <div class=PANEL>
                        <h3 class=format!("text-xl font-semibold {HEADING}")>{copy.contact_title}</h3>
                        <ul class=format!("mt-4 space-y-4 text-sm {MUTED}")>
                            {copy.contact_info.iter().map(contact_row).collect_view()}
                        </ul>
                    </div>
                </section>

                <section class="grid gap-8 md:grid-cols-2">
                    <div class=PANEL>
                        <h3 class=format!("text-xl font-semibold {HEADING}")>{copy.education_title}</h3>
                        <div class="mt-4 rounded-2xl border border-green-200 bg-green-50 p-6 dark:border-green-500/30 dark:bg-green-500/10">
                            <p class="text-sm font-semibold text-green-700 dark:text-green-200">{education.period}</p>
                            <h4 class=format!("mt-1 text-lg font-semibold {HEADING}")>{education.program}</h4>
                            <p class=format!("text-sm {MUTED}")>{education.school}</p>
                            <p class="mt-4 text-sm leading-6 text-gray-600 dark:text-slate-200">{education.focus}</p>
                        </div>
                    </div>

                    <div class=PANEL>
                        <h3 class=format!("text-xl font-semibold {HEADING}")>{copy.languages_title}</h3>
                        <ul class="mt-4 space-y-4">{copy.language_levels.iter().map(language_row).collect_view()}</ul>
                    </div>
                </section>

                <section class=PANEL>
                    <h3 class=format!("text-xl font-semibold {HEADING}")>{copy.toolkit_title}</h3>
                    <div class="mt-4 flex flex-wrap gap-3">
                        {copy
                            .technical_skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="rounded-full bg-blue-100 px-4 py-2 text-sm font-medium text-blue-700 dark:bg-blue-500/15 dark:text-blue-200">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        }
    }
}

fn contact_row(item: &'static ContactItem) -> impl IntoView {
    let value = match item.href {
        Some(href) => view! {
            <a
                href=href
                target="_blank"
                rel="noreferrer"
                class="mt-1 text-blue-600 hover:text-blue-500 dark:text-blue-300 dark:hover:text-blue-200"
            >
                {item.value}
            </a>
        }
        .into_any(),
        None => view! { <span class="mt-1">{item.value}</span> }.into_any(),
    };

    view! {
        <li class="flex flex-col">
            <span class=format!("font-semibold {HEADING}")>{item.label}</span>
            {value}
        </li>
    }
}

fn language_row(level: &'static LanguageLevel) -> impl IntoView {
    view! {
        <li class="rounded-2xl border border-gray-200 p-4 dark:border-slate-800">
            <div class=format!("flex items-center justify-between text-sm font-semibold {HEADING}")>
                <span>{level.name}</span>
                <span class="text-blue-500 dark:text-blue-300">{level.level}</span>
            </div>
            <div class="mt-3 flex gap-2">
                {confidence_segments(level.confidence)
                    .into_iter()
                    .map(|filled| {
                        let fill = if filled { "bg-blue-500 dark:bg-blue-400" } else { "bg-gray-200 dark:bg-slate-800" };
                        view! { <span class=format!("h-2.5 flex-1 rounded-full {fill}")></span> }
                    })
                    .collect_view()}
            </div>
        </li>
    }
}
