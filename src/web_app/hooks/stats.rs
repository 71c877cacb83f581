// web_app/hooks/stats.rs - Collection-wide aggregates

use leptos::prelude::*;

use crate::web_app::filters::{note_statistics, year_bounds};
use crate::web_app::model::{Fragrance, NoteStatistics, YearRange};

/// Per-layer counts of `note` over the whole collection, ignoring filters
pub fn use_note_statistics(
    fragrances: impl Into<Signal<Vec<Fragrance>>>,
    note: impl Into<Signal<String>>,
) -> Memo<NoteStatistics> {
    let fragrances = fragrances.into();
    let note = note.into();
    Memo::new(move |_| note.with(|note| fragrances.with(|all| note_statistics(all, note))))
}

/// Observed `[min, max]` release years, with a fixed fallback
pub fn use_year_range(fragrances: impl Into<Signal<Vec<Fragrance>>>) -> Memo<YearRange> {
    let fragrances = fragrances.into();
    Memo::new(move |_| fragrances.with(|all| year_bounds(all)))
}
