// tests/catalog_filter_tests.rs - Flat list and brand filters
//
// Notes, accords and perfumers share one search-and-sort filter; brands
// add country and parent-company facets.

use scent_catalog::fixtures::{FixtureSet, SampleBrands, SampleItems};
use scent_catalog::web_app::filters::{
    available_accords, available_notes, filter_items, unique_countries, unique_parents,
    BrandCriteria, ItemCriteria,
};
use scent_catalog::web_app::model::{Brand, CatalogItem, Fragrance, ItemSort, NoteLayer};

fn names<T: AsRef<str>>(values: impl IntoIterator<Item = T>) -> Vec<String> {
    values.into_iter().map(|v| v.as_ref().to_string()).collect()
}

fn item_names(items: &[CatalogItem]) -> Vec<String> {
    names(items.iter().map(|i| i.name.as_str()))
}

fn brand_names(brands: &[Brand]) -> Vec<String> {
    names(brands.iter().map(|b| b.name.as_str()))
}

#[test]
fn test_alphabetical_sort_folds_case() {
    let items = SampleItems::records();
    let sorted = filter_items(&items, "", ItemSort::Alphabetical);
    assert_eq!(item_names(&sorted), vec!["Amber", "bergamot", "Oud", "Vanilla"]);
}

#[test]
fn test_popularity_sort_is_stable_and_descending() {
    let items = SampleItems::records();
    let sorted = filter_items(&items, "", ItemSort::Popularity);
    // Vanilla and Amber tie at 120 and keep their loaded order; Oud has no metric
    assert_eq!(item_names(&sorted), vec!["bergamot", "Vanilla", "Amber", "Oud"]);
}

#[test]
fn test_perfumers_sort_by_contributions() {
    let perfumers = SampleItems::perfumers();
    let sorted = filter_items(&perfumers, "", ItemSort::Popularity);
    assert_eq!(item_names(&sorted), vec!["Alice Marchetti", "Jean Dupont"]);
}

#[test]
fn test_item_search_is_substring_and_case_insensitive() {
    let items = SampleItems::records();
    let criteria = ItemCriteria {
        search_query: " AN ".to_string(),
        sort_by: ItemSort::Alphabetical,
    };
    assert_eq!(item_names(&criteria.apply(&items)), vec!["Vanilla"]);

    let none = ItemCriteria {
        search_query: "xyz".to_string(),
        ..criteria
    };
    assert!(none.apply(&items).is_empty());
}

#[test]
fn test_item_filter_leaves_input_untouched() {
    let items = SampleItems::records();
    let before = items.clone();
    let _ = filter_items(&items, "a", ItemSort::Popularity);
    assert_eq!(items, before);
}

#[test]
fn test_brand_facets_are_sorted_and_distinct() {
    let brands = SampleBrands::records();
    assert_eq!(unique_countries(&brands), vec!["France", "Italy", "United Kingdom"]);
    assert_eq!(unique_parents(&brands), vec!["Nord Group"]);
}

#[test]
fn test_brand_parent_facet() {
    let brands = SampleBrands::records();
    let criteria = BrandCriteria {
        parent: Some("Nord Group".to_string()),
        ..BrandCriteria::default()
    };
    assert_eq!(brand_names(&criteria.apply(&brands)), vec!["Heritage House", "Maison Nord"]);
}

#[test]
fn test_brand_facets_combine_with_search() {
    let brands = SampleBrands::records();
    let criteria = BrandCriteria {
        search_query: "house".to_string(),
        country: Some("France".to_string()),
        ..BrandCriteria::default()
    };
    assert!(criteria.apply(&brands).is_empty());

    let italy = BrandCriteria {
        country: Some("Italy".to_string()),
        ..BrandCriteria::default()
    };
    assert_eq!(brand_names(&italy.apply(&brands)), vec!["atelier fleur"]);
}

#[test]
fn test_brand_sorts() {
    let brands = SampleBrands::records();
    let alphabetical = BrandCriteria::default().apply(&brands);
    assert_eq!(
        brand_names(&alphabetical),
        vec!["atelier fleur", "Heritage House", "Maison Nord", "Zest Lab"]
    );

    let popular = BrandCriteria {
        sort_by: ItemSort::Popularity,
        ..BrandCriteria::default()
    }
    .apply(&brands);
    assert_eq!(
        brand_names(&popular),
        vec!["Maison Nord", "atelier fleur", "Heritage House", "Zest Lab"]
    );
}

#[test]
fn test_brand_active_filters_ignore_sort() {
    let mut criteria = BrandCriteria {
        sort_by: ItemSort::Popularity,
        ..BrandCriteria::default()
    };
    assert!(!criteria.has_active_filters());

    criteria.country = Some("Italy".to_string());
    assert!(criteria.has_active_filters());
}

#[test]
fn test_dropdown_options_collapse_case() {
    let fragrances = vec![
        Fragrance {
            accords: Some("Woody, fresh".to_string()),
            top_notes: Some("Rose, lemon".to_string()),
            ..Fragrance::default()
        },
        Fragrance {
            accords: Some("woody, amber".to_string()),
            top_notes: Some("rose".to_string()),
            ..Fragrance::default()
        },
    ];

    assert_eq!(available_accords(&fragrances), vec!["amber", "fresh", "Woody"]);
    assert_eq!(available_notes(&fragrances, NoteLayer::Top), vec!["lemon", "Rose"]);
    assert!(available_notes(&fragrances, NoteLayer::Base).is_empty());
}
