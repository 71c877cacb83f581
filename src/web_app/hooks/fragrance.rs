// web_app/hooks/fragrance.rs - Fragrance filter hooks
//
// All criteria live in a single signal so that clearing is one state
// change. Only the search box text is kept apart, because it reaches
// the criteria through the debounce window.

use leptos::prelude::*;

use super::debounce::{use_debounce, UseDebounce};
use crate::web_app::filters::{gender_counts, FragranceCriteria, PositionFilter};
use crate::web_app::model::{
    AdvancedSearchData, Fragrance, GenderCounts, GenderFilter, NotePosition, YearRange, YearSort,
    SEARCH_DEBOUNCE,
};
use crate::web_app::timing::Scheduler;

/// Handle returned by [`use_fragrance_filter`]
#[derive(Clone, Copy)]
pub struct UseFragranceFilter {
    pub fragrances: RwSignal<Vec<Fragrance>>,
    pub criteria: RwSignal<FragranceCriteria>,
    pub debounced_search_query: Memo<String>,
    pub filtered_fragrances: Memo<Vec<Fragrance>>,
    /// Totals over the unfiltered collection
    pub gender_counts: Memo<GenderCounts>,
    pub has_active_filters: Memo<bool>,
    search: UseDebounce<String>,
}

impl UseFragranceFilter {
    /// Replace the loaded collection wholesale
    pub fn set_fragrances(&self, fragrances: Vec<Fragrance>) {
        self.fragrances.set(fragrances);
    }

    /// Raw search box text
    pub fn search_query(&self) -> RwSignal<String> {
        self.search.value
    }

    pub fn set_search_query(&self, query: String) {
        self.search.set(query);
    }

    pub fn selected_gender(&self) -> GenderFilter {
        self.criteria.with(|c| c.gender)
    }

    pub fn set_selected_gender(&self, gender: GenderFilter) {
        self.criteria.update(|c| c.gender = gender);
    }

    pub fn advanced_search_data(&self) -> AdvancedSearchData {
        self.criteria.with(|c| c.advanced.clone())
    }

    pub fn set_advanced_search_data(&self, data: AdvancedSearchData) {
        self.criteria.update(|c| c.advanced = data);
    }

    pub fn year_range(&self) -> Option<YearRange> {
        self.criteria.with(|c| c.year_range)
    }

    pub fn set_year_range(&self, range: Option<YearRange>) {
        self.criteria.update(|c| c.year_range = range);
    }

    pub fn year_sort(&self) -> YearSort {
        self.criteria.with(|c| c.year_sort)
    }

    pub fn set_year_sort(&self, sort: YearSort) {
        self.criteria.update(|c| c.year_sort = sort);
    }

    /// Search text, gender, advanced search, year range and sort, all at once
    pub fn clear_all_filters(&self) {
        self.search.reset(String::new());
        self.criteria.set(FragranceCriteria::default());
    }
}

pub fn use_fragrance_filter<S: Scheduler>(scheduler: S) -> UseFragranceFilter {
    let fragrances = RwSignal::new(Vec::<Fragrance>::new());
    let criteria = RwSignal::new(FragranceCriteria::default());

    let search = use_debounce(
        String::new(),
        SEARCH_DEBOUNCE,
        scheduler,
        Callback::new(move |query: String| criteria.update(|c| c.search_query = query)),
    );

    let debounced_search_query = Memo::new(move |_| criteria.with(|c| c.search_query.clone()));

    let filtered_fragrances = Memo::new(move |_| {
        let filtered = fragrances.with(|all| criteria.with(|c| c.apply(all)));
        tracing::debug!(
            "Fragrance filter recomputed: {} of {} fragrances",
            filtered.len(),
            fragrances.with_untracked(Vec::len)
        );
        filtered
    });

    let gender_counts = Memo::new(move |_| fragrances.with(|all| gender_counts(all)));
    let has_active_filters =
        Memo::new(move |_| criteria.with(FragranceCriteria::has_active_filters));

    UseFragranceFilter {
        fragrances,
        criteria,
        debounced_search_query,
        filtered_fragrances,
        gender_counts,
        has_active_filters,
        search,
    }
}

/// Handle returned by [`use_fragrance_filter_with_position`]
#[derive(Clone, Copy)]
pub struct UseFragranceFilterWithPosition {
    pub base: UseFragranceFilter,
    pub position: RwSignal<PositionFilter>,
    /// Base pipeline narrowed by note position
    pub filtered_fragrances: Memo<Vec<Fragrance>>,
    pub has_active_filters: Memo<bool>,
}

impl UseFragranceFilterWithPosition {
    pub fn selected_position(&self) -> NotePosition {
        self.position.with(|p| p.position)
    }

    pub fn set_selected_position(&self, position: NotePosition) {
        self.position.update(|p| p.position = position);
    }

    pub fn set_note_param(&self, note: Option<String>) {
        self.position.update(|p| p.note = note);
    }

    /// Clears the base filters and the position facet; the note is kept
    pub fn clear_all_filters(&self) {
        self.base.clear_all_filters();
        self.position.update(|p| p.position = NotePosition::All);
    }
}

/// Fragrance filter plus "the page's note sits in this layer"
pub fn use_fragrance_filter_with_position<S: Scheduler>(
    scheduler: S,
) -> UseFragranceFilterWithPosition {
    let base = use_fragrance_filter(scheduler);
    let position = RwSignal::new(PositionFilter::default());

    let filtered_fragrances = Memo::new(move |_| {
        base.filtered_fragrances
            .with(|filtered| position.with(|p| p.apply(filtered)))
    });
    let has_active_filters = Memo::new(move |_| {
        base.has_active_filters.get() || position.with(|p| p.position != NotePosition::All)
    });

    UseFragranceFilterWithPosition {
        base,
        position,
        filtered_fragrances,
        has_active_filters,
    }
}
