//! Landing page: hero, section highlights, skill pillars.

use leptos::prelude::*;

use crate::content::home::HOME;
use crate::content::{PROFILE_IMAGE, SHELL, Section};
use crate::state::context::use_preferences;

const BADGE_CLASSES: [&str; 3] = [
    "bg-blue-100 text-blue-700 dark:bg-blue-500/15 dark:text-blue-200",
    "bg-green-100 text-green-700 dark:bg-green-500/15 dark:text-green-200",
    "bg-purple-100 text-purple-700 dark:bg-purple-500/20 dark:text-purple-200",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let language = use_preferences().language();

    move || {
        let copy = HOME.get(language.get());
        let profile_alt = SHELL.get(language.get()).profile_alt;

        view! {
            <div class="space-y-10">
                <section class="overflow-hidden rounded-3xl bg-white shadow-2xl dark:border dark:border-slate-800 dark:bg-slate-900/80 dark:shadow-none">
                    <div class="flex flex-col gap-8 p-10 md:flex-row md:items-center">
                        <img
                            src=PROFILE_IMAGE
                            alt=profile_alt
                            class="h-40 w-40 rounded-full border-4 border-blue-500 object-cover"
                        />
                        <div class="space-y-4">
                            <h2 class="text-4xl font-bold text-gray-900 dark:text-white">{copy.hero_title}</h2>
                            <p class="text-lg leading-relaxed text-gray-600 dark:text-slate-300">{copy.hero_body}</p>
                            <div class="flex flex-wrap gap-3 text-sm">
                                {copy
                                    .hero_badges
                                    .iter()
                                    .zip(BADGE_CLASSES.iter().cycle())
                                    .map(|(badge, class)| {
                                        view! {
                                            <span class=format!("rounded-full px-4 py-2 font-medium {class}")>
                                                {*badge}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex flex-wrap gap-4 pt-2 text-sm font-medium">
                                <a
                                    href=Section::Projects.path()
                                    class="rounded-full bg-blue-500 px-5 py-2 text-white shadow-lg shadow-blue-200 transition hover:bg-blue-600 dark:bg-blue-500/90 dark:shadow-blue-700/30 dark:hover:bg-blue-400"
                                >
                                    {copy.hero_primary}
                                </a>
                                <a
                                    href=Section::About.path()
                                    class="rounded-full border border-gray-300 px-5 py-2 text-gray-600 transition hover:border-blue-500 hover:text-blue-600 dark:border-slate-700 dark:text-slate-200 dark:hover:border-blue-400 dark:hover:text-blue-200"
                                >
                                    {copy.hero_secondary}
                                </a>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="grid gap-6 md:grid-cols-3">
                    {copy
                        .highlight_cards
                        .iter()
                        .map(|card| {
                            view! {
                                <a
                                    href=card.target.path()
                                    class="group rounded-2xl border border-gray-200 bg-white p-6 shadow transition hover:shadow-xl dark:border-slate-800 dark:bg-slate-900/60 dark:hover:border-slate-700"
                                >
                                    <h3 class="text-xl font-semibold text-gray-900 group-hover:text-blue-600 dark:text-white dark:group-hover:text-blue-300">
                                        {card.title}
                                    </h3>
                                    <p class="mt-3 text-sm leading-6 text-gray-600 dark:text-slate-300">{card.description}</p>
                                    <span class="mt-5 inline-flex items-center gap-2 text-sm font-semibold text-blue-600 dark:text-blue-300">
                                        {card.action}
                                        <span aria-hidden="true" class="transition-transform group-hover:translate-x-1">
                                            "\u{2192}"
                                        </span>
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="rounded-3xl border border-dashed border-blue-200 bg-blue-50 p-8 md:p-10 dark:border-blue-400/40 dark:bg-slate-900/60">
                    <h3 class="text-2xl font-semibold text-blue-900 dark:text-blue-200">{copy.expectation_title}</h3>
                    <p class="mt-3 max-w-3xl text-sm leading-6 text-blue-800 dark:text-blue-200">
                        {copy.expectation_body}
                    </p>
                    <div class="mt-6 grid gap-5 md:grid-cols-3">
                        {copy
                            .skill_pillars
                            .iter()
                            .map(|pillar| {
                                view! {
                                    <div class="rounded-2xl bg-white p-5 shadow dark:border dark:border-slate-800 dark:bg-slate-900/60">
                                        <h4 class="text-lg font-semibold text-gray-900 dark:text-white">{pillar.title}</h4>
                                        <ul class="mt-3 space-y-2 text-sm text-gray-600 dark:text-slate-300">
                                            {pillar
                                                .details
                                                .iter()
                                                .map(|detail| {
                                                    view! {
                                                        <li class="flex items-center gap-2">
                                                            <span class="text-blue-500">"\u{2022}"</span>
                                                            {*detail}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        }
    }
}
