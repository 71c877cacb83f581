// web_app/pages/fragrances.rs - Fragrance catalog page
//
// Loads the whole catalog once, then filters, sorts and paginates it in
// the browser. Every facet change sends the grid back to its first page.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::hooks::{use_fragrance_filter, use_pagination, use_year_range, UsePagination};
use crate::web_app::model::{Fragrance, ITEMS_PER_PAGE, LOAD_MORE_DELAY};
use crate::web_app::pages::PageShell;
use crate::web_app::server_fns::get_fragrances;
use crate::web_app::timing::DefaultScheduler;

/// Main fragrance catalog page
#[component]
pub fn FragrancesPage() -> impl IntoView {
    let filter = use_fragrance_filter(DefaultScheduler::default());
    let catalog = Resource::new(|| (), |_| get_fragrances());

    // Hand the loaded catalog to the filter
    Effect::new(move |_| {
        if let Some(Ok(fragrances)) = catalog.get() {
            tracing::debug!("Fragrance catalog loaded: {} records", fragrances.len());
            filter.set_fragrances(fragrances);
        }
    });

    let pagination = use_pagination(
        filter.filtered_fragrances,
        ITEMS_PER_PAGE,
        LOAD_MORE_DELAY,
        DefaultScheduler::default(),
    );
    reset_on_change(pagination, filter.filtered_fragrances);

    let all_fragrances = Signal::derive(move || filter.fragrances.get());
    let year_bounds = use_year_range(all_fragrances);
    let remaining = Signal::derive(move || {
        filter
            .filtered_fragrances
            .with(Vec::len)
            .saturating_sub(pagination.displayed_items.with(Vec::len))
    });

    let selected = RwSignal::new(None::<Fragrance>);
    let on_select = Callback::new(move |fragrance: Fragrance| selected.set(Some(fragrance)));
    let on_close = Callback::new(move |()| selected.set(None));
    let on_clear = Callback::new(move |()| filter.clear_all_filters());

    view! {
        <PageShell title="Fragrances".to_string()>
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100 space-y-5">
                <SearchBar filter=filter fragrances=all_fragrances />
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <GenderFacet
                        selected=Signal::derive(move || filter.selected_gender())
                        counts=filter.gender_counts
                        on_change=Callback::new(move |g| filter.set_selected_gender(g))
                    />
                    <div class="flex flex-wrap items-center gap-4">
                        <YearFacet
                            range=Signal::derive(move || filter.year_range())
                            bounds=year_bounds
                            on_change=Callback::new(move |r| filter.set_year_range(r))
                        />
                        <YearSortDropdown
                            sort=Signal::derive(move || filter.year_sort())
                            on_change=Callback::new(move |s| filter.set_year_sort(s))
                        />
                    </div>
                </div>
                <Show when=move || filter.has_active_filters.get()>
                    <div class="flex justify-end">
                        <SecondaryButton on_click=on_clear>"Clear all filters"</SecondaryButton>
                    </div>
                </Show>
            </section>

            <Suspense fallback=move || view! { <Loading message="Loading fragrances..." /> }>
                {move || match catalog.get() {
                    None => view! { <Loading message="Loading fragrances..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <p class="text-sm text-gray-500 mb-4">
                            {move || format!(
                                "Showing {} of {} fragrances",
                                pagination.displayed_items.with(Vec::len),
                                filter.filtered_fragrances.with(Vec::len),
                            )}
                        </p>
                        <Show
                            when=move || !filter.filtered_fragrances.with(Vec::is_empty)
                            fallback=move || view! { <EmptyState what="fragrances" on_clear=on_clear /> }
                        >
                            <FragranceGrid fragrances=pagination.displayed_items on_select=on_select />
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

            {move || selected.get().map(|fragrance| view! {
                <FragranceDetail fragrance=fragrance on_close=on_close />
            })}
        </PageShell>
    }
}

/// Send `pagination` back to its first page whenever `source` changes
pub(crate) fn reset_on_change<T>(pagination: UsePagination<T>, source: Memo<Vec<T>>)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    Effect::new(move |_| {
        source.track();
        pagination.reset.run(());
    });
}
