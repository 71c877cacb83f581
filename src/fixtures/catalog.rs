// fixtures/catalog.rs - Sample catalog records

use super::FixtureSet;
use crate::web_app::model::{Brand, CatalogItem, Fragrance};

/// Five fragrances across two brands and every gender
///
/// | id | name          | gender  | year | accords        |
/// |----|---------------|---------|------|----------------|
/// | 1  | Cedar Dusk    | men     | 2020 | woody, fresh   |
/// | 2  | Rose Lumiere  | women   | 2021 | floral, sweet  |
/// | 3  | Citrus Veil   | unisex  | 2015 | citrus, fresh  |
/// | 4  | Spice Route   | Unisex  | none | woody, spicy   |
/// | 5  | Old Amber     | women   | 0    | amber, sweet   |
pub struct SampleFragrances;

impl FixtureSet for SampleFragrances {
    type Record = Fragrance;

    fn records() -> Vec<Fragrance> {
        vec![
            fragrance(1, "Cedar Dusk", "Maison Nord", "men", Some(2020))
                .accords("woody, fresh")
                .layers(Some("bergamot, grapefruit"), Some("pepper, geranium"), Some("cedar, vetiver")),
            fragrance(2, "Rose Lumiere", "Atelier Fleur", "women", Some(2021))
                .accords("floral, sweet")
                .layers(Some("pear, lychee"), Some("rose, peony"), Some("musk, vanilla")),
            fragrance(3, "Citrus Veil", "Maison Nord", "unisex", Some(2015))
                .accords("citrus, fresh")
                .layers(Some("lemon, Bergamot"), Some("neroli"), Some("musk")),
            fragrance(4, "Spice Route", "Atelier Fleur", "Unisex", None)
                .accords("woody, spicy")
                .uncategorized("cardamom, cedar, oud"),
            fragrance(5, "Old Amber", "Heritage House", "women", Some(0))
                .accords("amber, sweet")
                .layers(None, None, Some("amber, vanilla")),
        ]
    }
}

/// Brands with and without country and parent
pub struct SampleBrands;

impl FixtureSet for SampleBrands {
    type Record = Brand;

    fn records() -> Vec<Brand> {
        vec![
            brand("Maison Nord", Some("France"), Some("Nord Group"), Some(42)),
            brand("atelier fleur", Some("Italy"), None, Some(17)),
            brand("Heritage House", Some("United Kingdom"), Some("Nord Group"), Some(8)),
            brand("Zest Lab", None, None, None),
        ]
    }
}

/// Notes with appearance counts
pub struct SampleItems;

impl FixtureSet for SampleItems {
    type Record = CatalogItem;

    fn records() -> Vec<CatalogItem> {
        vec![
            item(1, "Vanilla", Some(120), None),
            item(2, "bergamot", Some(300), None),
            item(3, "Amber", Some(120), None),
            item(4, "Oud", None, None),
        ]
    }
}

impl SampleItems {
    /// Perfumers report contributions rather than appearances
    pub fn perfumers() -> Vec<CatalogItem> {
        vec![
            item(10, "Jean Dupont", None, Some(12)),
            item(11, "Alice Marchetti", None, Some(30)),
        ]
    }
}

fn fragrance(id: i64, name: &str, brand: &str, gender: &str, year: Option<i32>) -> Fragrance {
    Fragrance {
        id,
        name: name.to_string(),
        brand: Some(brand.to_string()),
        gender: Some(gender.to_string()),
        year,
        ..Fragrance::default()
    }
}

fn brand(name: &str, country: Option<&str>, parent: Option<&str>, total: Option<i64>) -> Brand {
    Brand {
        name: name.to_string(),
        country: country.map(str::to_string),
        parent: parent.map(str::to_string),
        total_fragrances: total,
    }
}

fn item(id: i64, name: &str, appearances: Option<i64>, contributions: Option<i64>) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        total_appearances: appearances,
        total_contributions: contributions,
    }
}

trait FragranceExt {
    fn accords(self, accords: &str) -> Self;
    fn layers(self, top: Option<&str>, middle: Option<&str>, base: Option<&str>) -> Self;
    fn uncategorized(self, notes: &str) -> Self;
}

impl FragranceExt for Fragrance {
    fn accords(mut self, accords: &str) -> Self {
        self.accords = Some(accords.to_string());
        self
    }

    fn layers(mut self, top: Option<&str>, middle: Option<&str>, base: Option<&str>) -> Self {
        self.top_notes = top.map(str::to_string);
        self.middle_notes = middle.map(str::to_string);
        self.base_notes = base.map(str::to_string);
        self
    }

    fn uncategorized(mut self, notes: &str) -> Self {
        self.uncategorized_notes = Some(notes.to_string());
        self
    }
}
