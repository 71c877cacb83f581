// web_app/pages/layout.rs - Shared page chrome

use leptos::prelude::*;

use crate::web_app::components::{ErrorDisplay, FragranceDetail};
use crate::web_app::model::CatalogKind;
use crate::web_app::server_fns::get_random_fragrance;

/// Header, navigation and page body
#[component]
pub fn PageShell(
    children: Children,
    /// Heading shown above the page body
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    let nav = [
        ("/fragrances", "Fragrances".to_string()),
        ("/brands", "Brands".to_string()),
        ("/notes", CatalogKind::Notes.to_string()),
        ("/accords", CatalogKind::Accords.to_string()),
        ("/perfumers", CatalogKind::Perfumers.to_string()),
    ];

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between gap-6">
                    <a href="/" class="flex items-center gap-2">
                        <span class="text-2xl">"🌸"</span>
                        <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-rose-600 to-amber-500">
                            "Scent Catalog"
                        </span>
                    </a>
                    <nav class="hidden md:flex items-center gap-5 text-sm font-medium text-gray-600">
                        {nav.into_iter().map(|(href, label)| view! {
                            <a href=href class="hover:text-rose-600 transition-colors">{label}</a>
                        }).collect_view()}
                    </nav>
                    <RandomFragranceButton />
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">{move || title.get()}</h1>
                {children()}
            </main>
        </div>
    }
}

/// Asks the catalog for a random fragrance and shows it in a modal
#[component]
pub fn RandomFragranceButton() -> impl IntoView {
    let pick = Action::new(|_: &()| get_random_fragrance());
    let close = Callback::new(move |()| pick.value().set(None));

    view! {
        <button
            type="button"
            class="px-4 py-2 rounded-lg bg-amber-50 text-amber-800 border border-amber-200 \
                   hover:bg-amber-100 font-medium text-sm disabled:opacity-50"
            disabled=move || pick.pending().get()
            on:click=move |_| { pick.dispatch(()); }
        >
            "Surprise me"
        </button>
        {move || match pick.value().get() {
            Some(Ok(fragrance)) => view! {
                <FragranceDetail fragrance=fragrance on_close=close />
            }.into_any(),
            Some(Err(e)) => view! {
                <div class="fixed bottom-4 right-4 z-50 max-w-sm" on:click=move |_| close.run(())>
                    <ErrorDisplay error=e.to_string() />
                </div>
            }.into_any(),
            None => ().into_any(),
        }}
    }
}
