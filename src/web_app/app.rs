// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, meta tags and the page tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{
    AccordsPage, BrandsPage, FragrancesPage, NotePage, NotesPage, PerfumersPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Scent Catalog" />
        <Meta name="description" content="Browse fragrances by brand, accord, note and perfumer" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/scent_catalog.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=FragrancesPage />
                <Route path=path!("/fragrances") view=FragrancesPage />
                <Route path=path!("/brands") view=BrandsPage />
                <Route path=path!("/notes") view=NotesPage />
                <Route path=path!("/notes/:name") view=NotePage />
                <Route path=path!("/accords") view=AccordsPage />
                <Route path=path!("/perfumers") view=PerfumersPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/fragrances"
                    class="px-6 py-3 bg-rose-600 text-white rounded-lg hover:bg-rose-700 transition-colors"
                >
                    "Browse fragrances"
                </a>
            </div>
        </div>
    }
}
