// web_app/filters/pagination.rs - Incremental "load more" pagination
//
// State machine: Idle -> Loading -> Idle. A load request while Loading,
// or while everything is already shown, does nothing. Completions carry
// a ticket so that a reset in the meantime discards them.

use serde::{Deserialize, Serialize};

/// Identifies one in-flight "load more"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    Loading(LoadTicket),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
    state: LoadState,
    issued: u64,
}

impl Paginator {
    /// A page size of zero is treated as one
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            state: LoadState::Idle,
            issued: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading(_))
    }

    fn visible_len(&self) -> usize {
        self.items_per_page.saturating_mul(self.current_page)
    }

    /// The prefix of `items` currently on screen
    pub fn displayed<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.visible_len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible_len()
    }

    /// Enter Loading if idle and more items exist
    pub fn begin_load_more(&mut self, total: usize) -> Option<LoadTicket> {
        if self.is_loading() || !self.has_more(total) {
            return None;
        }
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        self.state = LoadState::Loading(ticket);
        Some(ticket)
    }

    /// Advance one page if `ticket` is still the pending load
    pub fn finish_load_more(&mut self, ticket: LoadTicket) -> bool {
        if self.state != LoadState::Loading(ticket) {
            return false;
        }
        self.current_page += 1;
        self.state = LoadState::Idle;
        true
    }

    /// Back to page one; any pending load is abandoned
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.state = LoadState::Idle;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(crate::web_app::model::ITEMS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_grows_per_page() {
        let items: Vec<u32> = (0..45).collect();
        let mut pager = Paginator::new(20);
        assert_eq!(pager.displayed(&items).len(), 20);

        let ticket = pager.begin_load_more(items.len()).unwrap();
        assert!(pager.is_loading());
        assert!(pager.finish_load_more(ticket));
        assert_eq!(pager.displayed(&items).len(), 40);

        let ticket = pager.begin_load_more(items.len()).unwrap();
        pager.finish_load_more(ticket);
        assert_eq!(pager.displayed(&items).len(), 45);
        assert!(!pager.has_more(items.len()));
    }

    #[test]
    fn test_reentrant_load_is_ignored() {
        let mut pager = Paginator::new(2);
        let first = pager.begin_load_more(10).unwrap();
        assert_eq!(pager.begin_load_more(10), None);
        pager.finish_load_more(first);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_no_more_items_does_not_start_loading() {
        let mut pager = Paginator::new(20);
        assert_eq!(pager.begin_load_more(20), None);
        assert!(!pager.is_loading());
    }

    #[test]
    fn test_reset_discards_pending_load() {
        let mut pager = Paginator::new(5);
        let ticket = pager.begin_load_more(50).unwrap();
        pager.reset();
        assert!(!pager.finish_load_more(ticket));
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.is_loading());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let pager = Paginator::new(0);
        assert_eq!(pager.items_per_page(), 1);
        assert_eq!(pager.displayed(&[1, 2, 3]), &[1]);
    }
}
