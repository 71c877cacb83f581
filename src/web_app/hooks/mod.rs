// web_app/hooks/mod.rs - Reactive adapters over the filter engine
//
// Each hook owns its signals and exposes memoized results plus setters.
// The heavy lifting stays in `web_app::filters`; these only decide when
// to recompute.
//
// Structure:
// - debounce.rs: use_debounce, use_debounced_signal
// - pagination.rs: use_pagination
// - items.rs: use_item_filter, use_brand_filter
// - fragrance.rs: use_fragrance_filter, use_fragrance_filter_with_position
// - stats.rs: use_note_statistics, use_year_range
// - advanced.rs: use_advanced_search

pub mod advanced;
pub mod debounce;
pub mod fragrance;
pub mod items;
pub mod pagination;
pub mod stats;

pub use advanced::{use_advanced_search, UseAdvancedSearch};
pub use debounce::{use_debounce, use_debounced_signal, UseDebounce};
pub use fragrance::{
    use_fragrance_filter, use_fragrance_filter_with_position, UseFragranceFilter,
    UseFragranceFilterWithPosition,
};
pub use items::{use_brand_filter, use_item_filter, UseBrandFilter, UseItemFilter};
pub use pagination::{use_pagination, UsePagination};
pub use stats::{use_note_statistics, use_year_range};
