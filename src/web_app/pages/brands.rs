// web_app/pages/brands.rs - Brand list page

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::hooks::{use_brand_filter, use_pagination};
use crate::web_app::model::{ItemSort, ITEMS_PER_PAGE, LOAD_MORE_DELAY};
use crate::web_app::pages::fragrances::reset_on_change;
use crate::web_app::pages::PageShell;
use crate::web_app::server_fns::get_brands;
use crate::web_app::timing::DefaultScheduler;

#[component]
pub fn BrandsPage() -> impl IntoView {
    let filter = use_brand_filter(DefaultScheduler::default());
    let brands = Resource::new(|| (), |_| get_brands());

    Effect::new(move |_| {
        if let Some(Ok(list)) = brands.get() {
            filter.set_brands(list);
        }
    });

    let pagination = use_pagination(
        filter.filtered_brands,
        ITEMS_PER_PAGE,
        LOAD_MORE_DELAY,
        DefaultScheduler::default(),
    );
    reset_on_change(pagination, filter.filtered_brands);

    let remaining = Signal::derive(move || {
        filter
            .filtered_brands
            .with(Vec::len)
            .saturating_sub(pagination.displayed_items.with(Vec::len))
    });
    let on_clear = Callback::new(move |()| filter.clear_filters());

    view! {
        <PageShell title="Brands".to_string()>
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100 flex flex-wrap gap-4 items-center">
                <ListSearch
                    value=filter.search_query()
                    on_input=Callback::new(move |q| filter.set_search_query(q))
                    placeholder="Search brands..."
                />
                <BrandFacets filter=filter />
                <ItemSortDropdown
                    sort=Signal::derive(move || filter.criteria.with(|c| c.sort_by))
                    options=vec![ItemSort::Alphabetical, ItemSort::Popularity]
                    on_change=Callback::new(move |s| filter.set_sort_by(s))
                />
                <Show when=move || filter.has_active_filters.get()>
                    <SecondaryButton on_click=on_clear>"Clear filters"</SecondaryButton>
                </Show>
            </section>

            <Suspense fallback=move || view! { <Loading message="Loading brands..." /> }>
                {move || match brands.get() {
                    None => view! { <Loading message="Loading brands..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <Show
                            when=move || !filter.filtered_brands.with(Vec::is_empty)
                            fallback=move || view! { <EmptyState what="brands" on_clear=on_clear /> }
                        >
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                <For
                                    each=move || pagination.displayed_items.get()
                                    key=|brand| brand.name.clone()
                                    children=|brand| view! { <BrandCard brand=brand /> }
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
