// web_app/filters/mod.rs - Client-side filter engine
//
// Pure data transformations over already-fetched collections. Nothing
// here touches signals, timers or the network; the Leptos hooks wrap
// these functions and recompute them on demand.
//
// Structure:
// - text.rs: comma-list tokens and case-insensitive matching
// - fragrance.rs: fragrance pipeline, advanced matcher, gender counts
// - position.rs: note-position narrowing for the note page
// - items.rs: notes/accords/perfumers and brand lists
// - stats.rs: note statistics, year bounds, dropdown option lists
// - advanced.rs: advanced search panel state
// - pagination.rs: load-more state machine
// - debounce.rs: debounced value state

pub mod advanced;
pub mod debounce;
pub mod fragrance;
pub mod items;
pub mod pagination;
pub mod position;
pub mod stats;
pub mod text;

pub use advanced::{AdvancedSearchBuilder, SearchField};
pub use debounce::{DebounceTicket, Debouncer};
pub use fragrance::{gender_counts, matches_advanced, matches_text, sort_by_year, FragranceCriteria};
pub use items::{
    filter_items, unique_countries, unique_parents, BrandCriteria, CatalogEntry, ItemCriteria,
};
pub use pagination::{LoadState, LoadTicket, Paginator};
pub use position::PositionFilter;
pub use stats::{available_accords, available_notes, current_year, note_statistics, year_bounds};
