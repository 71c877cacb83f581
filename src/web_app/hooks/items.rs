// web_app/hooks/items.rs - Flat list filter hooks (notes, accords, perfumers, brands)

use leptos::prelude::*;

use super::debounce::{use_debounce, UseDebounce};
use crate::web_app::filters::{unique_countries, unique_parents, BrandCriteria, CatalogEntry, ItemCriteria};
use crate::web_app::model::{Brand, ItemSort, SEARCH_DEBOUNCE};
use crate::web_app::timing::Scheduler;

/// Handle returned by [`use_item_filter`]
pub struct UseItemFilter<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub criteria: RwSignal<ItemCriteria>,
    pub sort_options: StoredValue<Vec<ItemSort>>,
    pub filtered_items: Memo<Vec<T>>,
    search: UseDebounce<String>,
}

impl<T: Send + Sync + 'static> Clone for UseItemFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseItemFilter<T> {}

impl<T> UseItemFilter<T>
where
    T: CatalogEntry + Clone + PartialEq + Send + Sync + 'static,
{
    /// Replace the loaded list wholesale
    pub fn set_items(&self, items: Vec<T>) {
        self.items.set(items);
    }

    /// Raw search box text
    pub fn search_query(&self) -> RwSignal<String> {
        self.search.value
    }

    pub fn set_search_query(&self, query: String) {
        self.search.set(query);
    }

    pub fn sort_by(&self) -> ItemSort {
        self.criteria.with(|c| c.sort_by)
    }

    pub fn set_sort_by(&self, sort_by: ItemSort) {
        self.criteria.update(|c| c.sort_by = sort_by);
    }
}

/// Name search and sorting over a flat list.
///
/// The first of `sort_options` is the initial sort.
pub fn use_item_filter<T, S>(sort_options: &[ItemSort], scheduler: S) -> UseItemFilter<T>
where
    T: CatalogEntry + Clone + PartialEq + Send + Sync + 'static,
    S: Scheduler,
{
    let items = RwSignal::new(Vec::<T>::new());
    let criteria = RwSignal::new(ItemCriteria {
        search_query: String::new(),
        sort_by: sort_options.first().copied().unwrap_or_default(),
    });

    let search = use_debounce(
        String::new(),
        SEARCH_DEBOUNCE,
        scheduler,
        Callback::new(move |query: String| criteria.update(|c| c.search_query = query)),
    );

    let filtered_items = Memo::new(move |_| {
        let filtered = items.with(|all| criteria.with(|c| c.apply(all)));
        tracing::debug!("Item filter recomputed: {} items", filtered.len());
        filtered
    });

    UseItemFilter {
        items,
        criteria,
        sort_options: StoredValue::new(sort_options.to_vec()),
        filtered_items,
        search,
    }
}

/// Handle returned by [`use_brand_filter`]
#[derive(Clone, Copy)]
pub struct UseBrandFilter {
    pub brands: RwSignal<Vec<Brand>>,
    pub criteria: RwSignal<BrandCriteria>,
    pub filtered_brands: Memo<Vec<Brand>>,
    /// Facet options from the loaded list, not the filtered one
    pub unique_countries: Memo<Vec<String>>,
    pub unique_parents: Memo<Vec<String>>,
    pub has_active_filters: Memo<bool>,
    search: UseDebounce<String>,
}

impl UseBrandFilter {
    pub fn set_brands(&self, brands: Vec<Brand>) {
        self.brands.set(brands);
    }

    pub fn search_query(&self) -> RwSignal<String> {
        self.search.value
    }

    pub fn set_search_query(&self, query: String) {
        self.search.set(query);
    }

    pub fn set_sort_by(&self, sort_by: ItemSort) {
        self.criteria.update(|c| c.sort_by = sort_by);
    }

    pub fn set_country(&self, country: Option<String>) {
        self.criteria.update(|c| c.country = country);
    }

    pub fn set_parent(&self, parent: Option<String>) {
        self.criteria.update(|c| c.parent = parent);
    }

    /// Search text and both facets in one state change; sort order is kept
    pub fn clear_filters(&self) {
        self.search.reset(String::new());
        self.criteria.update(|c| {
            c.search_query.clear();
            c.country = None;
            c.parent = None;
        });
    }
}

pub fn use_brand_filter<S: Scheduler>(scheduler: S) -> UseBrandFilter {
    let brands = RwSignal::new(Vec::<Brand>::new());
    let criteria = RwSignal::new(BrandCriteria::default());

    let search = use_debounce(
        String::new(),
        SEARCH_DEBOUNCE,
        scheduler,
        Callback::new(move |query: String| criteria.update(|c| c.search_query = query)),
    );

    let filtered_brands = Memo::new(move |_| brands.with(|all| criteria.with(|c| c.apply(all))));
    let unique_countries = Memo::new(move |_| brands.with(|all| unique_countries(all)));
    let unique_parents = Memo::new(move |_| brands.with(|all| unique_parents(all)));
    let has_active_filters = Memo::new(move |_| criteria.with(BrandCriteria::has_active_filters));

    UseBrandFilter {
        brands,
        criteria,
        filtered_brands,
        unique_countries,
        unique_parents,
        has_active_filters,
        search,
    }
}
