// web_app/hooks/pagination.rs - Incremental pagination hook

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::filters::Paginator;
use crate::web_app::timing::Scheduler;

/// Handle returned by [`use_pagination`]
pub struct UsePagination<T: Send + Sync + 'static> {
    pub displayed_items: Memo<Vec<T>>,
    pub has_more: Memo<bool>,
    pub is_loading_more: Memo<bool>,
    pub current_page: Memo<usize>,
    pub load_more: Callback<()>,
    pub reset: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for UsePagination<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UsePagination<T> {}

/// Expose a growing prefix of `items`.
///
/// The owner must call `reset` whenever the filtered source changes.
pub fn use_pagination<T, S>(
    items: impl Into<Signal<Vec<T>>>,
    items_per_page: usize,
    delay: Duration,
    scheduler: S,
) -> UsePagination<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    S: Scheduler,
{
    let items: Signal<Vec<T>> = items.into();
    let pager = RwSignal::new(Paginator::new(items_per_page));

    let displayed_items = Memo::new(move |_| {
        items.with(|all| pager.with(|p| p.displayed(all).to_vec()))
    });
    let has_more = Memo::new(move |_| {
        let total = items.with(Vec::len);
        pager.with(|p| p.has_more(total))
    });
    let is_loading_more = Memo::new(move |_| pager.with(Paginator::is_loading));
    let current_page = Memo::new(move |_| pager.with(Paginator::current_page));

    let load_more = Callback::new(move |()| {
        let total = items.with_untracked(Vec::len);
        let idle_with_more = pager.with_untracked(|p| !p.is_loading() && p.has_more(total));
        if !idle_with_more {
            return;
        }
        let Some(ticket) = pager.try_update(|p| p.begin_load_more(total)).flatten() else {
            return;
        };
        tracing::debug!("Loading page {}", pager.with_untracked(Paginator::current_page) + 1);
        scheduler.schedule(
            delay,
            Box::new(move || {
                pager.try_update(|p| p.finish_load_more(ticket));
            }),
        );
    });

    let reset = Callback::new(move |()| {
        let dirty = pager.with_untracked(|p| p.current_page() != 1 || p.is_loading());
        if dirty {
            pager.update(Paginator::reset);
        }
    });

    UsePagination {
        displayed_items,
        has_more,
        is_loading_more,
        current_page,
        load_more,
        reset,
    }
}
