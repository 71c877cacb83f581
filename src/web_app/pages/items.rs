// web_app/pages/items.rs - Notes, accords and perfumers list pages
//
// The three collections share one page; only the endpoint, the wording
// and the card link differ.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::hooks::{use_item_filter, use_pagination};
use crate::web_app::model::{CatalogItem, CatalogKind, ItemSort, ITEMS_PER_PAGE, LOAD_MORE_DELAY};
use crate::web_app::pages::fragrances::reset_on_change;
use crate::web_app::pages::PageShell;
use crate::web_app::server_fns::get_catalog_items;
use crate::web_app::timing::DefaultScheduler;

/// Sort choices offered for a collection, default first
pub fn sort_options(kind: CatalogKind) -> Vec<ItemSort> {
    match kind {
        CatalogKind::Notes | CatalogKind::Accords => {
            vec![ItemSort::Popularity, ItemSort::Alphabetical]
        }
        CatalogKind::Perfumers => vec![ItemSort::Alphabetical, ItemSort::Popularity],
    }
}

#[component]
pub fn CatalogItemsPage(kind: CatalogKind) -> impl IntoView {
    let options = sort_options(kind);
    let filter = use_item_filter::<CatalogItem, _>(&options, DefaultScheduler::default());
    let items = Resource::new(move || kind, get_catalog_items);

    Effect::new(move |_| {
        if let Some(Ok(list)) = items.get() {
            tracing::debug!("Loaded {} {}", list.len(), kind.as_str());
            filter.set_items(list);
        }
    });

    let pagination = use_pagination(
        filter.filtered_items,
        ITEMS_PER_PAGE,
        LOAD_MORE_DELAY,
        DefaultScheduler::default(),
    );
    reset_on_change(pagination, filter.filtered_items);

    let remaining = Signal::derive(move || {
        filter
            .filtered_items
            .with(Vec::len)
            .saturating_sub(pagination.displayed_items.with(Vec::len))
    });
    let what = match kind {
        CatalogKind::Notes => "notes",
        CatalogKind::Accords => "accords",
        CatalogKind::Perfumers => "perfumers",
    };

    view! {
        <PageShell title=kind.to_string()>
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100 flex flex-wrap gap-4 items-center">
                <ListSearch
                    value=filter.search_query()
                    on_input=Callback::new(move |q| filter.set_search_query(q))
                />
                <ItemSortDropdown
                    sort=Signal::derive(move || filter.sort_by())
                    options=options
                    on_change=Callback::new(move |s| filter.set_sort_by(s))
                />
            </section>

            <Suspense fallback=move || view! { <Loading /> }>
                {move || match items.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <Show
                            when=move || !filter.filtered_items.with(Vec::is_empty)
                            fallback=move || view! { <EmptyState what=what /> }
                        >
                            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4">
                                <For
                                    each=move || pagination.displayed_items.get()
                                    key=|item| item.id
                                    children=move |item| view! { <ItemCard item=item kind=kind /> }
                                />
                            </div>
                            <LoadMoreButton
                                has_more=pagination.has_more
                                is_loading=pagination.is_loading_more
                                remaining=remaining
                                on_load_more=pagination.load_more
                            />
                        </Show>
                    }.into_any(),
                }}
            </Suspense>
        </PageShell>
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    view! { <CatalogItemsPage kind=CatalogKind::Notes /> }
}

#[component]
pub fn AccordsPage() -> impl IntoView {
    view! { <CatalogItemsPage kind=CatalogKind::Accords /> }
}

#[component]
pub fn PerfumersPage() -> impl IntoView {
    view! { <CatalogItemsPage kind=CatalogKind::Perfumers /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfumers_default_to_alphabetical() {
        assert_eq!(sort_options(CatalogKind::Perfumers)[0], ItemSort::Alphabetical);
        assert_eq!(sort_options(CatalogKind::Notes)[0], ItemSort::Popularity);
        assert_eq!(sort_options(CatalogKind::Accords).len(), 2);
    }
}
