// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, LoadMoreButton, etc.)
// - search.rs: Search bar, advanced panel and facet controls
// - fragrance.rs: Record display components (FragranceCard, ItemCard, BrandCard, FragranceDetail)

pub mod common;
pub mod fragrance;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use fragrance::*;
pub use search::*;
