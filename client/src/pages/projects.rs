//! Featured projects.

use leptos::prelude::*;

use crate::content::projects::{PROJECTS, Project};
use crate::state::context::use_preferences;

const LABEL: &str = "text-sm font-semibold uppercase tracking-wider text-blue-500 dark:text-blue-300";
const BODY: &str = "mt-2 text-sm leading-6 text-gray-600 dark:text-slate-300";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let language = use_preferences().language();

    move || {
        let copy = PROJECTS.get(language.get());
        let view_repository = copy.view_repository;

        view! {
            <div class="space-y-10">
                <section class="space-y-4">
                    <h2 class="text-3xl font-semibold text-gray-900 dark:text-white">{copy.heading}</h2>
                    <p class="max-w-3xl text-sm leading-6 text-gray-600 dark:text-slate-300">{copy.intro}</p>
                </section>
                <div class="space-y-6">
                    {copy.projects.iter().map(|project| project_card(project, view_repository)).collect_view()}
                </div>
            </div>
        }
    }
}

fn project_card(project: &'static Project, view_repository: &'static str) -> impl IntoView {
    view! {
        <article class="rounded-3xl bg-white p-8 shadow-xl dark:border dark:border-slate-800 dark:bg-slate-900/60 dark:shadow-none">
            <header class="flex flex-wrap items-center justify-between gap-4">
                <h3 class="text-2xl font-semibold text-gray-900 dark:text-white">{project.title}</h3>
                {project
                    .link
                    .map(|link| {
                        view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noreferrer"
                                class="text-sm font-semibold text-blue-600 hover:text-blue-500 dark:text-blue-300 dark:hover:text-blue-200"
                            >
                                {view_repository}
                            </a>
                        }
                    })}
            </header>
            <p class=format!("mt-4 {LABEL}")>{project.summary_label}</p>
            <p class=BODY>{project.summary}</p>
            <p class=format!("mt-4 {LABEL}")>{project.details_label}</p>
            <p class=BODY>{project.details}</p>
            <div class="mt-6 flex flex-wrap gap-3 text-sm">
                {project
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="rounded-full bg-gray-100 px-4 py-2 font-medium text-gray-700 dark:bg-slate-800 dark:text-slate-200">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
