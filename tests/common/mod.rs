// common/mod.rs - Shared test utilities
//
// Small helpers over the sample catalog in `scent_catalog::fixtures`.

#![allow(dead_code)]

use scent_catalog::fixtures::{FixtureSet, SampleFragrances};
use scent_catalog::web_app::model::Fragrance;

/// Ids of a fragrance list, in order
pub fn ids(fragrances: &[Fragrance]) -> Vec<i64> {
    fragrances.iter().map(|f| f.id).collect()
}

/// The whole five-record sample catalog
pub fn catalog() -> Vec<Fragrance> {
    SampleFragrances::records()
}

/// The first four sample records: one each of men and women, two unisex
pub fn four_fragrances() -> Vec<Fragrance> {
    SampleFragrances::records().into_iter().take(4).collect()
}

/// Anonymous fragrance with only the fields a test cares about
pub fn fragrance(id: i64) -> Fragrance {
    Fragrance {
        id,
        name: format!("Fragrance {}", id),
        ..Fragrance::default()
    }
}
