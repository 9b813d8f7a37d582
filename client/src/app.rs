//! Root application component with routing and the preference context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::content::SHELL;
use crate::pages::{
    about::AboutPage, certificates::CertificatesPage, experience::ExperiencePage, home::HomePage,
    projects::ProjectsPage,
};
use crate::state::context::{provide_preferences, use_preferences};
use crate::state::preferences::PreferenceStore;
use crate::util::environment::BrowserEnvironment;

/// Root application component.
///
/// Creates the session's preference store and provides it to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = PreferenceStore::new(Arc::new(BrowserEnvironment));
    let prefs = provide_preferences(store);
    let language = prefs.language();

    view! {
        <Title text=move || SHELL.get(language.get()).title/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("experience") view=ExperiencePage/>
                    <Route path=StaticSegment("certificates") view=CertificatesPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let language = use_preferences().language();
    view! {
        <p class="text-lg text-gray-600 dark:text-slate-300">{move || SHELL.get(language.get()).not_found}</p>
    }
}
