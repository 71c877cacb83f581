// web_app/timing.rs - Injectable timers
//
// The debounced search box and the "load more" button both wait before
// touching state. They go through `Scheduler` so tests can drive time by
// hand and server rendering never arms a browser timer.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Deferred unit of work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once `delay` has elapsed
pub trait Scheduler: Clone + Send + Sync + 'static {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Runs every task on the spot, ignoring the delay
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, task: Task) {
        task();
    }
}

/// Browser `setTimeout` through Leptos
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        if let Err(e) = leptos::prelude::set_timeout_with_handle(move || task(), delay) {
            tracing::warn!("Failed to arm timer: {:?}", e);
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// Scheduler used by pages in this build
        pub type DefaultScheduler = BrowserScheduler;
    } else {
        /// Scheduler used by pages in this build
        pub type DefaultScheduler = ImmediateScheduler;
    }
}

struct Queued {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    seq: u64,
    queue: Vec<Queued>,
}

/// Virtual clock for tests: tasks run only when `advance` passes their due time
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks still waiting
    pub fn pending(&self) -> usize {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner).queue.len()
    }

    /// Move the clock forward, running due tasks in due-time order.
    /// Tasks scheduled by those tasks run too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.lock().unwrap_or_else(PoisonError::into_inner).now + by;
        loop {
            let next = {
                let mut clock = self.clock.lock().unwrap_or_else(PoisonError::into_inner);
                let earliest = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, queued)| queued.due <= target)
                    .min_by_key(|(_, queued)| (queued.due, queued.seq))
                    .map(|(index, _)| index);
                match earliest {
                    Some(index) => {
                        let queued = clock.queue.remove(index);
                        clock.now = queued.due;
                        Some(queued.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            // Run outside the lock so the task may schedule again
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = self.clock.lock().unwrap_or_else(PoisonError::into_inner);
        clock.seq += 1;
        let queued = Queued {
            due: clock.now + delay,
            seq: clock.seq,
            task,
        };
        clock.queue.push(queued);
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_manual_scheduler_waits_for_due_time() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        scheduler.schedule(
            Duration::from_millis(300),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        scheduler.advance(Duration::from_millis(299));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (delay, label) in [(200, "late"), (100, "early")] {
            let order = order.clone();
            scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || order.lock().unwrap_or_else(PoisonError::into_inner).push(label)),
            );
        }
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*order.lock().unwrap_or_else(PoisonError::into_inner), vec!["early", "late"]);
    }

    #[test]
    fn test_immediate_scheduler_runs_inline() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        ImmediateScheduler.schedule(
            Duration::from_secs(60),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
