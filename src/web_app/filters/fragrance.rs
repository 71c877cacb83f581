// web_app/filters/fragrance.rs - Fragrance filter pipeline
//
// Stages run in a fixed order and only ever narrow the list:
//   1. free-text search (regular mode) OR the advanced matcher
//   2. gender facet
//   3. year range
//   4. optional stable year sort
//
// Records missing a year sort as year 0: last under "newest", first
// under "oldest". They are never dropped by the sort itself, only by an
// active year range.

use serde::{Deserialize, Serialize};

use super::text::{field_contains, list_contains_all, list_contains_none, normalize_query};
use crate::web_app::model::{
    AdvancedSearchData, Fragrance, GenderCounts, GenderFilter, SearchMode, YearRange, YearSort,
};

/// Everything the fragrance grid can be narrowed by
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FragranceCriteria {
    /// Debounced free-text query, only consulted in regular mode
    pub search_query: String,
    pub gender: GenderFilter,
    pub advanced: AdvancedSearchData,
    pub year_range: Option<YearRange>,
    pub year_sort: YearSort,
}

impl FragranceCriteria {
    /// Run the whole pipeline. The input slice is left untouched.
    pub fn apply(&self, fragrances: &[Fragrance]) -> Vec<Fragrance> {
        let query = normalize_query(&self.search_query);

        let mut filtered: Vec<Fragrance> = fragrances
            .iter()
            .filter(|f| self.matches_search(f, &query))
            .filter(|f| self.gender.matches(f.gender.as_deref()))
            .filter(|f| self.matches_year(f))
            .cloned()
            .collect();

        sort_by_year(&mut filtered, self.year_sort);
        filtered
    }

    fn matches_search(&self, fragrance: &Fragrance, query: &str) -> bool {
        match self.advanced.mode {
            SearchMode::Regular => query.is_empty() || matches_text(fragrance, query),
            SearchMode::Layered | SearchMode::Uncategorized => {
                matches_advanced(&self.advanced, fragrance)
            }
        }
    }

    fn matches_year(&self, fragrance: &Fragrance) -> bool {
        match self.year_range {
            None => true,
            Some(range) => fragrance
                .release_year()
                .is_some_and(|year| range.contains(year)),
        }
    }

    /// Whether a "clear filters" affordance makes sense
    pub fn has_active_filters(&self) -> bool {
        let text_active = self.advanced.mode == SearchMode::Regular
            && !self.search_query.trim().is_empty();
        let advanced_active =
            self.advanced.mode != SearchMode::Regular && !self.advanced.is_empty();

        text_active
            || advanced_active
            || self.gender != GenderFilter::All
            || self.year_range.is_some()
            || self.year_sort != YearSort::None
    }
}

/// Free-text match across name, brand, accords and every note layer
pub fn matches_text(fragrance: &Fragrance, query: &str) -> bool {
    let query = normalize_query(query);
    if query.is_empty() {
        return true;
    }

    [
        Some(fragrance.name.as_str()),
        fragrance.brand.as_deref(),
        fragrance.accords.as_deref(),
        fragrance.uncategorized_notes.as_deref(),
        fragrance.top_notes.as_deref(),
        fragrance.middle_notes.as_deref(),
        fragrance.base_notes.as_deref(),
    ]
    .into_iter()
    .any(|field| field_contains(field, &query))
}

/// Structured accord/note include-exclude match.
///
/// Included terms use AND semantics, excluded terms reject on the first hit.
/// Layered mode checks top/middle/base only; uncategorized mode checks
/// the uncategorized list only.
pub fn matches_advanced(search: &AdvancedSearchData, fragrance: &Fragrance) -> bool {
    let accords = fragrance.accords.as_deref();
    if !list_contains_all(accords, &search.accords)
        || !list_contains_none(accords, &search.excluded_accords)
    {
        return false;
    }

    search.mode.layers().iter().all(|layer| {
        let notes = fragrance.notes(*layer);
        list_contains_all(notes, search.notes.get(*layer))
            && list_contains_none(notes, search.excluded_notes.get(*layer))
    })
}

/// Stable sort by release year; missing years count as 0
pub fn sort_by_year(fragrances: &mut [Fragrance], order: YearSort) {
    let key = |f: &Fragrance| f.release_year().unwrap_or(0);
    match order {
        YearSort::None => {}
        YearSort::Newest => fragrances.sort_by(|a, b| key(b).cmp(&key(a))),
        YearSort::Oldest => fragrances.sort_by_key(key),
    }
}

/// Gender totals over the unfiltered collection.
///
/// Unrecognized genders only count towards `all`.
pub fn gender_counts(fragrances: &[Fragrance]) -> GenderCounts {
    fragrances.iter().fold(
        GenderCounts {
            all: fragrances.len(),
            ..GenderCounts::default()
        },
        |mut counts, fragrance| {
            let gender = fragrance.gender.as_deref();
            if GenderFilter::Men.matches(gender) {
                counts.men += 1;
            } else if GenderFilter::Women.matches(gender) {
                counts.women += 1;
            } else if GenderFilter::Unisex.matches(gender) {
                counts.unisex += 1;
            }
            counts
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::NoteLayer;

    fn fragrance(id: i64, accords: &str, year: Option<i32>) -> Fragrance {
        Fragrance {
            id,
            name: format!("Fragrance {id}"),
            accords: Some(accords.to_string()),
            year,
            ..Fragrance::default()
        }
    }

    #[test]
    fn test_empty_criteria_keep_everything_in_order() {
        let list = vec![fragrance(1, "woody", None), fragrance(2, "floral", Some(1999))];
        assert_eq!(FragranceCriteria::default().apply(&list), list);
    }

    #[test]
    fn test_free_text_ignored_outside_regular_mode() {
        let list = vec![fragrance(1, "woody", None)];
        let criteria = FragranceCriteria {
            search_query: "no such thing".to_string(),
            advanced: AdvancedSearchData::with_mode(SearchMode::Layered),
            ..FragranceCriteria::default()
        };
        assert_eq!(criteria.apply(&list).len(), 1);
    }

    #[test]
    fn test_layered_mode_ignores_uncategorized_notes() {
        let mut f = fragrance(1, "woody", None);
        f.uncategorized_notes = Some("rose".to_string());
        f.top_notes = Some("bergamot".to_string());

        let mut search = AdvancedSearchData::with_mode(SearchMode::Layered);
        search.excluded_notes.uncategorized.push("rose".to_string());
        assert!(matches_advanced(&search, &f));

        search.excluded_notes.get_mut(NoteLayer::Top).push("bergamot".to_string());
        assert!(!matches_advanced(&search, &f));
    }

    #[test]
    fn test_uncategorized_mode_ignores_layers() {
        let mut f = fragrance(1, "woody", None);
        f.uncategorized_notes = Some("rose, oud".to_string());
        f.top_notes = Some("bergamot".to_string());

        let mut search = AdvancedSearchData::with_mode(SearchMode::Uncategorized);
        search.notes.top.push("lemon".to_string());
        search.notes.uncategorized.push("oud".to_string());
        assert!(matches_advanced(&search, &f));

        search.notes.uncategorized.push("amber".to_string());
        assert!(!matches_advanced(&search, &f));
    }

    #[test]
    fn test_has_active_filters_only_counts_text_in_regular_mode() {
        let mut criteria = FragranceCriteria {
            search_query: "  ".to_string(),
            ..FragranceCriteria::default()
        };
        assert!(!criteria.has_active_filters());

        criteria.search_query = "oud".to_string();
        assert!(criteria.has_active_filters());

        criteria.advanced = AdvancedSearchData::with_mode(SearchMode::Layered);
        assert!(!criteria.has_active_filters());

        criteria.advanced.accords.push("woody".to_string());
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_gender_counts_skip_unknown_genders() {
        let mut list = vec![Fragrance::default(); 4];
        list[0].gender = Some("MEN".to_string());
        list[1].gender = Some("women".to_string());
        list[2].gender = Some("kids".to_string());

        let counts = gender_counts(&list);
        assert_eq!(counts.all, 4);
        assert_eq!(counts.men, 1);
        assert_eq!(counts.women, 1);
        assert_eq!(counts.unisex, 0);
    }

    #[test]
    fn test_empty_record_never_panics() {
        let list = vec![Fragrance::default()];
        let mut search = AdvancedSearchData::with_mode(SearchMode::Layered);
        search.accords.push("woody".to_string());
        let criteria = FragranceCriteria {
            advanced: search,
            year_range: Some(YearRange::new(1900, 2000)),
            year_sort: YearSort::Newest,
            gender: GenderFilter::Unisex,
            ..FragranceCriteria::default()
        };
        assert!(criteria.apply(&list).is_empty());
        assert!(matches_text(&list[0], ""));
    }
}
