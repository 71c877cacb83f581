// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - FragrancesPage: the fragrance catalog with every facet
// - BrandsPage: brands with country and parent-company facets
// - CatalogItemsPage: notes, accords or perfumers as a flat list
// - NotePage: fragrances containing one note, with a position facet
// - layout.rs: header, navigation and the random-fragrance button

pub mod brands;
pub mod fragrances;
pub mod items;
pub mod layout;
pub mod note;

// Re-export page components
pub use brands::BrandsPage;
pub use fragrances::FragrancesPage;
pub use items::{AccordsPage, CatalogItemsPage, NotesPage, PerfumersPage};
pub use layout::PageShell;
pub use note::NotePage;
