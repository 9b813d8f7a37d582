//! Experience timeline with a contact callout.

use leptos::prelude::*;

use crate::content::experience::{EXPERIENCE, ExperienceItem};
use crate::state::context::use_preferences;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let language = use_preferences().language();

    move || {
        let copy = EXPERIENCE.get(language.get());

        view! {
            <div class="space-y-10">
                <section class="space-y-4">
                    <h2 class="text-3xl font-semibold text-gray-900 dark:text-white">{copy.heading}</h2>
                    <p class="max-w-3xl text-sm leading-6 text-gray-600 dark:text-slate-300">{copy.intro}</p>
                </section>

                <ol class="relative border-l border-gray-300 pl-6 dark:border-slate-800">
                    {copy.experiences.iter().map(timeline_entry).collect_view()}
                </ol>

                <section class="rounded-3xl border border-dashed border-gray-300 bg-white/80 p-8 text-sm text-gray-600 dark:border-slate-700 dark:bg-slate-900/60 dark:text-slate-300">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{copy.callout_title}</h3>
                    <p class="mt-3 leading-6">
                        {copy.callout_body}
                        " "
                        <a
                            href=copy.callout_href
                            class="font-semibold text-blue-600 hover:underline dark:text-blue-300 dark:hover:text-blue-200"
                        >
                            {copy.callout_cta}
                        </a>
                        "."
                    </p>
                </section>
            </div>
        }
    }
}

fn timeline_entry(item: &'static ExperienceItem) -> impl IntoView {
    view! {
        <li class="mb-10 ml-4 last:mb-0">
            <div
                class="absolute -left-[9px] h-4 w-4 rounded-full border-2 border-white bg-blue-500 dark:bg-blue-400"
                aria-hidden="true"
            ></div>
            <div class="rounded-3xl bg-white p-6 shadow-xl dark:border dark:border-slate-800 dark:bg-slate-900/60 dark:shadow-none">
                <header class="flex flex-wrap items-center justify-between gap-2">
                    <div>
                        <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{item.role}</h3>
                        <p class="text-sm font-medium text-blue-600 dark:text-blue-300">{item.company}</p>
                    </div>
                    <div class="text-right text-xs font-semibold uppercase tracking-wider text-gray-500 dark:text-slate-400">
                        <p>{item.period}</p>
                        <p>{item.location}</p>
                    </div>
                </header>
                <ul class="mt-4 space-y-3 text-sm leading-6 text-gray-600 dark:text-slate-300">
                    {item
                        .achievements
                        .iter()
                        .map(|achievement| {
                            view! {
                                <li class="flex items-start gap-3">
                                    <span class="mt-1 text-blue-500 dark:text-blue-300">"\u{25b9}"</span>
                                    <span>{*achievement}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </li>
    }
}
