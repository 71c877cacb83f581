// web_app/hooks/advanced.rs - Advanced search panel hook
//
// Every effective mutation sends the full query to `on_change` exactly
// once. Refused mutations (duplicates, conflicting include/exclude,
// fields the mode does not search) stay silent.

use leptos::prelude::*;

use crate::web_app::filters::{AdvancedSearchBuilder, SearchField};
use crate::web_app::model::{AdvancedSearchData, NoteLayer, SearchMode};

/// Handle returned by [`use_advanced_search`]
#[derive(Clone, Copy)]
pub struct UseAdvancedSearch {
    pub state: RwSignal<AdvancedSearchBuilder>,
    on_change: Callback<AdvancedSearchData>,
}

impl UseAdvancedSearch {
    fn mutate(&self, f: impl FnOnce(&mut AdvancedSearchBuilder) -> bool) -> bool {
        // Refused mutations leave subscribers untouched
        let changed = self
            .state
            .try_maybe_update(|builder| {
                let changed = f(builder);
                (changed, changed)
            })
            .unwrap_or(false);
        if changed {
            let query = self.state.with_untracked(|b| b.query().clone());
            self.on_change.run(query);
        }
        changed
    }

    pub fn mode(&self) -> SearchMode {
        self.state.with(AdvancedSearchBuilder::mode)
    }

    pub fn set_mode(&self, mode: SearchMode) -> bool {
        self.mutate(|b| b.set_mode(mode))
    }

    pub fn add_accord(&self, accord: &str) -> bool {
        self.mutate(|b| b.add_accord(accord))
    }

    pub fn exclude_accord(&self, accord: &str) -> bool {
        self.mutate(|b| b.exclude_accord(accord))
    }

    pub fn remove_accord(&self, accord: &str) -> bool {
        self.mutate(|b| b.remove_accord(accord))
    }

    pub fn remove_excluded_accord(&self, accord: &str) -> bool {
        self.mutate(|b| b.remove_excluded_accord(accord))
    }

    pub fn add_note(&self, layer: NoteLayer, note: &str) -> bool {
        self.mutate(|b| b.add_note(layer, note))
    }

    pub fn exclude_note(&self, layer: NoteLayer, note: &str) -> bool {
        self.mutate(|b| b.exclude_note(layer, note))
    }

    pub fn remove_note(&self, layer: NoteLayer, note: &str) -> bool {
        self.mutate(|b| b.remove_note(layer, note))
    }

    pub fn remove_excluded_note(&self, layer: NoteLayer, note: &str) -> bool {
        self.mutate(|b| b.remove_excluded_note(layer, note))
    }

    pub fn toggle_dropdown(&self, field: SearchField) {
        self.state.update(|b| b.toggle_dropdown(field));
    }

    pub fn close_dropdown(&self) {
        self.state.update(AdvancedSearchBuilder::close_dropdown);
    }

    pub fn set_filter_text(&self, field: SearchField, text: &str) {
        self.state.update(|b| b.set_filter_text(field, text));
    }

    /// Back to an empty regular-mode panel without notifying; used when
    /// the owning filter was cleared as a whole
    pub fn reset(&self) {
        self.state.set(AdvancedSearchBuilder::default());
    }
}

pub fn use_advanced_search(on_change: Callback<AdvancedSearchData>) -> UseAdvancedSearch {
    UseAdvancedSearch {
        state: RwSignal::new(AdvancedSearchBuilder::new()),
        on_change,
    }
}
