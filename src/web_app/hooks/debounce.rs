// web_app/hooks/debounce.rs - Debounced input hook

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::filters::Debouncer;
use crate::web_app::timing::Scheduler;

/// Handle returned by [`use_debounce`]
pub struct UseDebounce<T: Send + Sync + 'static> {
    /// Latest input, updated on every keystroke
    pub value: RwSignal<T>,
    state: StoredValue<Debouncer<T>>,
    push: Callback<T>,
    on_settle: Callback<T>,
}

impl<T: Send + Sync + 'static> Clone for UseDebounce<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseDebounce<T> {}

impl<T> UseDebounce<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Record new input; `on_settle` fires once input has been quiet for the delay
    pub fn set(&self, value: T) {
        self.push.run(value);
    }

    /// Commit `value` right away and notify
    pub fn flush(&self, value: T) {
        self.value.set(value.clone());
        self.state.update_value(|d| d.flush(value.clone()));
        self.on_settle.run(value);
    }

    /// Commit `value` right away without notifying; the caller owns the
    /// downstream state change
    pub fn reset(&self, value: T) {
        self.value.set(value.clone());
        self.state.update_value(|d| d.flush(value));
    }

    pub fn is_pending(&self) -> bool {
        self.state.with_value(|d| d.is_pending())
    }
}

/// Debounce a rapidly changing value.
///
/// `on_settle` receives the value after `delay` has passed without a
/// newer `set`. Pending timers are neutralized when the owner is disposed.
pub fn use_debounce<T, S>(
    initial: T,
    delay: Duration,
    scheduler: S,
    on_settle: Callback<T>,
) -> UseDebounce<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    S: Scheduler,
{
    let value = RwSignal::new(initial.clone());
    let state = StoredValue::new(Debouncer::new(initial));

    let push = Callback::new(move |next: T| {
        value.set(next.clone());
        let Some(ticket) = state.try_update_value(|d| d.push(next)) else {
            return;
        };
        scheduler.schedule(
            delay,
            Box::new(move || {
                let settled = state
                    .try_update_value(|d| d.fire(ticket).then(|| d.value().clone()))
                    .flatten();
                if let Some(settled) = settled {
                    on_settle.run(settled);
                }
            }),
        );
    });

    on_cleanup(move || {
        state.try_update_value(|d| d.cancel());
    });

    UseDebounce {
        value,
        state,
        push,
        on_settle,
    }
}

/// Debounce into a signal of its own
pub fn use_debounced_signal<T, S>(
    initial: T,
    delay: Duration,
    scheduler: S,
) -> (UseDebounce<T>, ReadSignal<T>)
where
    T: Clone + PartialEq + Send + Sync + 'static,
    S: Scheduler,
{
    let debounced = RwSignal::new(initial.clone());
    let handle = use_debounce(
        initial,
        delay,
        scheduler,
        Callback::new(move |value: T| debounced.set(value)),
    );
    (handle, debounced.read_only())
}
