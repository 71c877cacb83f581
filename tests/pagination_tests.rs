// tests/pagination_tests.rs - "Load more" state machine

use scent_catalog::web_app::filters::{LoadState, Paginator};
use scent_catalog::web_app::model::ITEMS_PER_PAGE;

/// Drive load-more to completion, checking the display invariants after
/// every step
fn check_growth(total: usize, per_page: usize) {
    let items: Vec<usize> = (0..total).collect();
    let mut pager = Paginator::new(per_page);
    let mut previous = 0;

    loop {
        let shown = pager.displayed(&items).len();
        assert!(shown >= previous, "display shrank for N={} P={}", total, per_page);
        assert_eq!(shown, total.min(per_page * pager.current_page()));
        assert_eq!(pager.has_more(total), shown < total);
        previous = shown;

        match pager.begin_load_more(total) {
            Some(ticket) => assert!(pager.finish_load_more(ticket)),
            None => break,
        }
    }

    assert_eq!(previous, total);
    assert!(!pager.has_more(total));
}

#[test]
fn test_display_grows_monotonically() {
    for (total, per_page) in [(0, 20), (1, 20), (20, 20), (21, 20), (45, 20), (7, 3), (100, 1)] {
        check_growth(total, per_page);
    }
}

#[test]
fn test_default_page_size() {
    let pager = Paginator::default();
    assert_eq!(pager.items_per_page(), ITEMS_PER_PAGE);
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_zero_page_size_is_clamped() {
    let items = [1, 2, 3];
    let pager = Paginator::new(0);
    assert_eq!(pager.items_per_page(), 1);
    assert_eq!(pager.displayed(&items[..]), &[1]);
}

#[test]
fn test_load_more_is_ignored_while_loading() {
    let mut pager = Paginator::new(10);
    let ticket = pager.begin_load_more(35).unwrap();
    assert!(pager.is_loading());
    assert_eq!(pager.begin_load_more(35), None);

    assert!(pager.finish_load_more(ticket));
    assert_eq!(pager.current_page(), 2);
    assert_eq!(pager.state(), LoadState::Idle);
}

#[test]
fn test_load_more_is_ignored_without_more_items() {
    let mut pager = Paginator::new(10);
    assert_eq!(pager.begin_load_more(10), None);
    assert!(!pager.is_loading());
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_reset_discards_pending_load() {
    let mut pager = Paginator::new(10);
    let first = pager.begin_load_more(50).unwrap();
    assert!(pager.finish_load_more(first));

    let pending = pager.begin_load_more(50).unwrap();
    pager.reset();
    assert_eq!(pager.current_page(), 1);
    assert!(!pager.is_loading());

    // The abandoned completion arrives late
    assert!(!pager.finish_load_more(pending));
    assert_eq!(pager.current_page(), 1);

    // A fresh load still works and the stale ticket stays dead
    let fresh = pager.begin_load_more(50).unwrap();
    assert_ne!(fresh, pending);
    assert!(!pager.finish_load_more(pending));
    assert!(pager.finish_load_more(fresh));
    assert_eq!(pager.current_page(), 2);
}

#[test]
fn test_shrinking_source_clamps_display() {
    let mut pager = Paginator::new(5);
    let ticket = pager.begin_load_more(20).unwrap();
    pager.finish_load_more(ticket);

    let fewer: Vec<u8> = (0..3).collect();
    assert_eq!(pager.displayed(&fewer).len(), 3);
    assert!(!pager.has_more(fewer.len()));
}
