// web_app/filters/position.rs - Note-position narrowing for the note page

use serde::{Deserialize, Serialize};

use super::text::{field_contains, normalize_query};
use crate::web_app::model::{Fragrance, NotePosition};

/// Requires the page's note to sit in one specific layer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionFilter {
    pub position: NotePosition,
    /// The note being browsed, usually taken from the route
    pub note: Option<String>,
}

impl PositionFilter {
    /// `All` or an empty note imposes no constraint
    pub fn matches(&self, fragrance: &Fragrance) -> bool {
        let Some(layer) = self.position.layer() else {
            return true;
        };
        let note = normalize_query(self.note.as_deref().unwrap_or_default());
        if note.is_empty() {
            return true;
        }
        field_contains(fragrance.notes(layer), &note)
    }

    /// Narrow an already filtered list, keeping its order
    pub fn apply(&self, fragrances: &[Fragrance]) -> Vec<Fragrance> {
        fragrances
            .iter()
            .filter(|f| self.matches(f))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_notes(top: &str, base: &str) -> Fragrance {
        Fragrance {
            top_notes: Some(top.to_string()),
            base_notes: Some(base.to_string()),
            ..Fragrance::default()
        }
    }

    #[test]
    fn test_missing_note_is_no_constraint() {
        let filter = PositionFilter {
            position: NotePosition::Top,
            note: None,
        };
        assert!(filter.matches(&Fragrance::default()));

        let blank = PositionFilter {
            position: NotePosition::Top,
            note: Some("   ".to_string()),
        };
        assert!(blank.matches(&Fragrance::default()));
    }

    #[test]
    fn test_only_selected_layer_is_checked() {
        let f = with_notes("lemon", "Bergamot, musk");
        let top = PositionFilter {
            position: NotePosition::Top,
            note: Some("bergamot".to_string()),
        };
        let base = PositionFilter {
            position: NotePosition::Base,
            note: Some("bergamot".to_string()),
        };
        assert!(!top.matches(&f));
        assert!(base.matches(&f));
    }
}
