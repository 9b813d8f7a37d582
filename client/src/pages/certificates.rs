//! Certificates and ongoing learning.

use leptos::prelude::*;

use crate::content::certificates::{CERTIFICATES, Certificate};
use crate::state::context::use_preferences;
use crate::state::preferences::LanguageCode;

#[component]
pub fn CertificatesPage() -> impl IntoView {
    let language = use_preferences().language();

    move || {
        let language = language.get();
        let copy = CERTIFICATES.get(language);
        let view_credential = copy.view_credential;

        view! {
            <div class="space-y-10">
                <section class="space-y-4">
                    <h2 class="text-3xl font-semibold text-gray-900 dark:text-white">{copy.heading}</h2>
                    <p class="max-w-3xl text-sm leading-6 text-gray-600 dark:text-slate-300">{copy.intro}</p>
                </section>

                <div class="grid gap-6 md:grid-cols-2">
                    {copy
                        .certificates
                        .iter()
                        .map(|certificate| certificate_card(certificate, language, view_credential))
                        .collect_view()}
                </div>

                <section class="rounded-3xl border border-dashed border-blue-200 bg-blue-50/80 p-8 text-sm text-blue-900 dark:border-blue-400/40 dark:bg-slate-900/60 dark:text-blue-100">
                    <h3 class="text-xl font-semibold text-blue-900 dark:text-blue-200">{copy.callout_title}</h3>
                    <p class="mt-3 leading-6">{copy.callout_body}</p>
                </section>
            </div>
        }
    }
}

fn certificate_card(
    certificate: &'static Certificate,
    language: LanguageCode,
    view_credential: &'static str,
) -> impl IntoView {
    view! {
        <article class="rounded-3xl bg-white p-7 shadow-xl dark:border dark:border-slate-800 dark:bg-slate-900/60 dark:shadow-none">
            <header class="space-y-2">
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{certificate.title}</h3>
                <p class="text-sm font-medium text-blue-600 dark:text-blue-300">{certificate.issuer}</p>
                <div class="flex items-center gap-3 text-xs font-semibold uppercase tracking-wider text-gray-500 dark:text-slate-400">
                    <span>{certificate.year}</span>
                    {certificate
                        .status
                        .map(|status| {
                            view! {
                                <span class="rounded-full bg-blue-50 px-3 py-1 text-blue-600 dark:bg-blue-400/20 dark:text-blue-200">
                                    {status.label(language)}
                                </span>
                            }
                        })}
                </div>
            </header>
            <p class="mt-4 text-sm leading-6 text-gray-600 dark:text-slate-300">{certificate.summary}</p>
            {certificate
                .credential_url
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noreferrer"
                            class="mt-5 inline-block text-sm font-semibold text-blue-600 hover:underline dark:text-blue-300"
                        >
                            {view_credential}
                        </a>
                    }
                })}
        </article>
    }
}
