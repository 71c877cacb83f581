// web_app/pages/note.rs - Note detail page
//
// Fragrances that list the route's note, with the regular fragrance
// facets plus "which layer the note sits in". Statistics are computed
// over the whole loaded set so the position counts do not move while
// other filters change.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::hooks::{
    use_fragrance_filter_with_position, use_note_statistics, use_pagination, use_year_range,
};
use crate::web_app::model::{Fragrance, ITEMS_PER_PAGE, LOAD_MORE_DELAY};
use crate::web_app::pages::fragrances::reset_on_change;
use crate::web_app::pages::PageShell;
use crate::web_app::server_fns::get_note_fragrances;
use crate::web_app::timing::DefaultScheduler;

#[component]
pub fn NotePage() -> impl IntoView {
    let params = use_params_map();
    let note = Memo::new(move |_| params.read().get("name").unwrap_or_default());

    let filter = use_fragrance_filter_with_position(DefaultScheduler::default());
    let base = filter.base;

    let fragrances = Resource::new(move || note.get(), get_note_fragrances);

    Effect::new(move |_| {
        let name = note.get();
        filter.set_note_param((!name.trim().is_empty()).then_some(name));
    });
    Effect::new(move |_| {
        if let Some(Ok(list)) = fragrances.get() {
            base.set_fragrances(list);
        }
    });

    let pagination = use_pagination(
        filter.filtered_fragrances,
        ITEMS_PER_PAGE,
        LOAD_MORE_DELAY,
        DefaultScheduler::default(),
    );
    reset_on_change(pagination, filter.filtered_fragrances);

    let all_fragrances = Signal::derive(move || base.fragrances.get());
    let statistics = use_note_statistics(all_fragrances, note);
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
        <PageShell title=note>
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100 space-y-5">
                <PositionFacet
                    selected=Signal::derive(move || filter.selected_position())
                    statistics=statistics
                    on_change=Callback::new(move |p| filter.set_selected_position(p))
                />
                <SearchBar filter=base fragrances=all_fragrances />
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <GenderFacet
                        selected=Signal::derive(move || base.selected_gender())
                        counts=base.gender_counts
                        on_change=Callback::new(move |g| base.set_selected_gender(g))
                    />
                    <div class="flex flex-wrap items-center gap-4">
                        <YearFacet
                            range=Signal::derive(move || base.year_range())
                            bounds=year_bounds
                            on_change=Callback::new(move |r| base.set_year_range(r))
                        />
                        <YearSortDropdown
                            sort=Signal::derive(move || base.year_sort())
                            on_change=Callback::new(move |s| base.set_year_sort(s))
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
                {move || match fragrances.get() {
                    None => view! { <Loading message="Loading fragrances..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
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
