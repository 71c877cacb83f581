// web_app/filters/advanced.rs - Advanced search panel state
//
// Accumulates included/excluded accords and per-layer notes. A term can
// live in at most one of the two lists of a field: adding it anywhere is
// refused while it is present in either. Switching mode wipes every list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::text::normalize_query;
use crate::web_app::model::{AdvancedSearchData, NoteLayer, SearchMode};

/// One add-dropdown of the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    Accords,
    Notes(NoteLayer),
}

/// Panel state: the structured query plus UI-only dropdown state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvancedSearchBuilder {
    data: AdvancedSearchData,
    open_dropdown: Option<SearchField>,
    accord_filter: String,
    note_filters: HashMap<NoteLayer, String>,
}

impl AdvancedSearchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The query handed to the fragrance filter
    pub fn query(&self) -> &AdvancedSearchData {
        &self.data
    }

    pub fn mode(&self) -> SearchMode {
        self.data.mode
    }

    /// Change mode, clearing every selection. Returns false if unchanged.
    pub fn set_mode(&mut self, mode: SearchMode) -> bool {
        if self.data.mode == mode {
            return false;
        }
        self.data = AdvancedSearchData::with_mode(mode);
        self.open_dropdown = None;
        self.accord_filter.clear();
        self.note_filters.clear();
        true
    }

    /// Drop every selection but keep the mode
    pub fn clear(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }
        self.data = AdvancedSearchData::with_mode(self.data.mode);
        true
    }

    /// Regular mode has no accord or note lists; other modes accept
    /// accords plus the note layers they search
    fn accepts(&self, field: SearchField) -> bool {
        match field {
            SearchField::Accords => self.data.mode != SearchMode::Regular,
            SearchField::Notes(layer) => self.data.mode.layers().contains(&layer),
        }
    }

    pub fn add_accord(&mut self, accord: &str) -> bool {
        self.accepts(SearchField::Accords)
            && insert_exclusive(&mut self.data.accords, &self.data.excluded_accords, accord)
    }

    pub fn exclude_accord(&mut self, accord: &str) -> bool {
        self.accepts(SearchField::Accords)
            && insert_exclusive(&mut self.data.excluded_accords, &self.data.accords, accord)
    }

    pub fn remove_accord(&mut self, accord: &str) -> bool {
        remove_term(&mut self.data.accords, accord)
    }

    pub fn remove_excluded_accord(&mut self, accord: &str) -> bool {
        remove_term(&mut self.data.excluded_accords, accord)
    }

    pub fn add_note(&mut self, layer: NoteLayer, note: &str) -> bool {
        self.accepts(SearchField::Notes(layer))
            && insert_exclusive(
                self.data.notes.get_mut(layer),
                self.data.excluded_notes.get(layer),
                note,
            )
    }

    pub fn exclude_note(&mut self, layer: NoteLayer, note: &str) -> bool {
        self.accepts(SearchField::Notes(layer))
            && insert_exclusive(
                self.data.excluded_notes.get_mut(layer),
                self.data.notes.get(layer),
                note,
            )
    }

    pub fn remove_note(&mut self, layer: NoteLayer, note: &str) -> bool {
        remove_term(self.data.notes.get_mut(layer), note)
    }

    pub fn remove_excluded_note(&mut self, layer: NoteLayer, note: &str) -> bool {
        remove_term(self.data.excluded_notes.get_mut(layer), note)
    }

    pub fn open_dropdown(&self) -> Option<SearchField> {
        self.open_dropdown
    }

    /// Open `field`, or close it if it is already open
    pub fn toggle_dropdown(&mut self, field: SearchField) {
        self.open_dropdown = match self.open_dropdown {
            Some(open) if open == field => None,
            _ => Some(field),
        };
    }

    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    pub fn filter_text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Accords => &self.accord_filter,
            SearchField::Notes(layer) => self
                .note_filters
                .get(&layer)
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    pub fn set_filter_text(&mut self, field: SearchField, text: &str) {
        match field {
            SearchField::Accords => self.accord_filter = text.to_string(),
            SearchField::Notes(layer) => {
                self.note_filters.insert(layer, text.to_string());
            }
        }
    }

    /// Dropdown entries: options containing the field's filter text that
    /// are neither included nor excluded yet
    pub fn suggestions<'a>(&self, field: SearchField, options: &'a [String]) -> Vec<&'a str> {
        let needle = normalize_query(self.filter_text(field));
        let (included, excluded): (&[String], &[String]) = match field {
            SearchField::Accords => (&self.data.accords, &self.data.excluded_accords),
            SearchField::Notes(layer) => (
                self.data.notes.get(layer),
                self.data.excluded_notes.get(layer),
            ),
        };

        options
            .iter()
            .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
            .filter(|option| !contains_term(included, option) && !contains_term(excluded, option))
            .map(String::as_str)
            .collect()
    }
}

fn contains_term(list: &[String], term: &str) -> bool {
    list.iter().any(|existing| existing.eq_ignore_ascii_case(term))
}

fn insert_exclusive(target: &mut Vec<String>, other: &[String], term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() || contains_term(target, term) || contains_term(other, term) {
        return false;
    }
    target.push(term.to_string());
    true
}

fn remove_term(list: &mut Vec<String>, term: &str) -> bool {
    let before = list.len();
    list.retain(|existing| !existing.eq_ignore_ascii_case(term.trim()));
    list.len() != before
}
