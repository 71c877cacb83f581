// web_app/filters/items.rs - Flat list filters (notes, accords, perfumers, brands)
//
// The flat lists share one shape: a name to search and a popularity
// metric to sort by. Brands add two exact-match facets on top.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::text::{alphabetical, field_contains, normalize_query};
use crate::web_app::model::{Brand, CatalogItem, ItemSort};

/// Anything listed in a searchable, sortable flat grid
pub trait CatalogEntry {
    fn name(&self) -> &str;

    /// Missing metrics count as zero
    fn popularity(&self) -> i64;
}

impl CatalogEntry for CatalogItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn popularity(&self) -> i64 {
        CatalogItem::popularity(self)
    }
}

impl CatalogEntry for Brand {
    fn name(&self) -> &str {
        &self.name
    }

    fn popularity(&self) -> i64 {
        self.total_fragrances.unwrap_or(0)
    }
}

/// Search text and sort order of a flat list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCriteria {
    /// Debounced search text
    pub search_query: String,
    pub sort_by: ItemSort,
}

impl ItemCriteria {
    pub fn apply<T: CatalogEntry + Clone>(&self, items: &[T]) -> Vec<T> {
        filter_items(items, &self.search_query, self.sort_by)
    }
}

/// Name search followed by a stable sort, on a copy of `items`
pub fn filter_items<T: CatalogEntry + Clone>(items: &[T], query: &str, sort_by: ItemSort) -> Vec<T> {
    let query = normalize_query(query);
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| query.is_empty() || field_contains(Some(item.name()), &query))
        .cloned()
        .collect();

    match sort_by {
        ItemSort::Alphabetical => filtered.sort_by(|a, b| alphabetical(a.name(), b.name())),
        ItemSort::Popularity => filtered.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
    }
    filtered
}

/// Brand list criteria: text search plus country and parent facets
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCriteria {
    pub search_query: String,
    pub sort_by: ItemSort,
    pub country: Option<String>,
    pub parent: Option<String>,
}

impl BrandCriteria {
    pub fn apply(&self, brands: &[Brand]) -> Vec<Brand> {
        let mut filtered = filter_items(brands, &self.search_query, self.sort_by);
        filtered.retain(|brand| {
            facet_matches(self.country.as_deref(), brand.country.as_deref())
                && facet_matches(self.parent.as_deref(), brand.parent.as_deref())
        });
        filtered
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_query.trim().is_empty() || self.country.is_some() || self.parent.is_some()
    }
}

fn facet_matches(selected: Option<&str>, value: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(selected) => value == Some(selected),
    }
}

/// Countries present in the loaded brands, sorted and de-duplicated
pub fn unique_countries(brands: &[Brand]) -> Vec<String> {
    unique_values(brands.iter().map(|b| b.country.as_deref()))
}

/// Parent companies present in the loaded brands, sorted and de-duplicated
pub fn unique_parents(brands: &[Brand]) -> Vec<String> {
    unique_values(brands.iter().map(|b| b.parent.as_deref()))
}

fn unique_values<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|value| !value.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
