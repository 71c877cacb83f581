// web_app/filters/debounce.rs - Debounced value state
//
// Every push bumps a generation. A timer firing with an old generation
// is ignored, so a burst of pushes commits only its last value.

/// Handed to the timer that will try to commit a pushed value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<T>,
    generation: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Last committed value
    pub fn value(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new input value; any earlier ticket becomes stale
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Commit the pending value if `ticket` is the latest.
    ///
    /// Returns true only when the committed value actually changed.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(value) if value != self.settled => {
                self.settled = value;
                true
            }
            _ => false,
        }
    }

    /// Commit `value` immediately, invalidating outstanding tickets
    pub fn flush(&mut self, value: T) {
        self.generation += 1;
        self.pending = None;
        self.settled = value;
    }

    /// Drop the pending value, e.g. when the owner goes away
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_commits() {
        let mut debouncer = Debouncer::new(String::new());
        let first = debouncer.push("r".to_string());
        let second = debouncer.push("ro".to_string());
        let third = debouncer.push("rose".to_string());

        assert!(!debouncer.fire(first));
        assert!(!debouncer.fire(second));
        assert_eq!(debouncer.value(), "");

        assert!(debouncer.fire(third));
        assert_eq!(debouncer.value(), "rose");
        assert!(!debouncer.fire(third));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(0);
        let ticket = debouncer.push(5);
        debouncer.cancel();
        assert!(!debouncer.fire(ticket));
        assert_eq!(*debouncer.value(), 0);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_flush_wins_over_pending_timer() {
        let mut debouncer = Debouncer::new("oud".to_string());
        let ticket = debouncer.push("ouds".to_string());
        debouncer.flush(String::new());
        assert!(!debouncer.fire(ticket));
        assert_eq!(debouncer.value(), "");
    }
}
