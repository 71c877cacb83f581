// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable test setup. Instead of hand-building the same
// catalog records in every test, each test asks a fixture set for them.
//
// The records mirror what the catalog API returns, including the rough
// edges: missing years, a zero year, mixed-case gender strings and
// fragrances that only carry uncategorized notes.

pub mod catalog;

pub use catalog::{SampleBrands, SampleFragrances, SampleItems};

/// A simple trait that all fixture sets implement
pub trait FixtureSet {
    type Record;

    /// Fresh copies of the records, in catalog order
    fn records() -> Vec<Self::Record>;
}
