// web_app/filters/stats.rs - Aggregates over a whole fragrance collection
//
// These always look at the loaded collection, never at a filtered view.

use std::collections::BTreeMap;

use chrono::Datelike;

use super::text::{field_contains, normalize_query, tokens};
use crate::web_app::model::{Fragrance, NoteLayer, NoteStatistics, YearRange, FALLBACK_MIN_YEAR};

/// Count the layers a note appears in across the collection.
///
/// A fragrance listing the note in several layers counts once per layer.
/// An empty note matches nothing.
pub fn note_statistics(fragrances: &[Fragrance], note: &str) -> NoteStatistics {
    let mut stats = NoteStatistics {
        total: fragrances.len(),
        ..NoteStatistics::default()
    };

    let note = normalize_query(note);
    if note.is_empty() {
        return stats;
    }

    for fragrance in fragrances {
        for layer in NoteLayer::ALL {
            if field_contains(fragrance.notes(layer), &note) {
                match layer {
                    NoteLayer::Top => stats.top += 1,
                    NoteLayer::Middle => stats.middle += 1,
                    NoteLayer::Base => stats.base += 1,
                    NoteLayer::Uncategorized => stats.uncategorized += 1,
                }
            }
        }
    }
    stats
}

/// Observed release-year span, or `[FALLBACK_MIN_YEAR, current year]`
pub fn year_bounds(fragrances: &[Fragrance]) -> YearRange {
    let (min, max) = fragrances
        .iter()
        .filter_map(Fragrance::release_year)
        .fold((None, None), |(min, max): (Option<i32>, Option<i32>), year| {
            (
                Some(min.map_or(year, |m| m.min(year))),
                Some(max.map_or(year, |m| m.max(year))),
            )
        });

    match (min, max) {
        (Some(min), Some(max)) => YearRange::new(min, max),
        _ => YearRange::new(FALLBACK_MIN_YEAR, current_year()),
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Distinct accord names across the collection, sorted case-insensitively
pub fn available_accords(fragrances: &[Fragrance]) -> Vec<String> {
    distinct_tokens(fragrances.iter().map(|f| f.accords.as_deref()))
}

/// Distinct note names found in one layer across the collection
pub fn available_notes(fragrances: &[Fragrance], layer: NoteLayer) -> Vec<String> {
    distinct_tokens(fragrances.iter().map(|f| f.notes(layer)))
}

fn distinct_tokens<'a>(fields: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    // Keyed by lowercase so "Rose" and "rose" collapse; first spelling wins
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for field in fields {
        for token in tokens(field) {
            seen.entry(token.to_lowercase())
                .or_insert_with(|| token.to_string());
        }
    }
    seen.into_values().collect()
}
