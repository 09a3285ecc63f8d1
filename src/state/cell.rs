use super::queue::UpdateQueue;
use super::request::UpdateRequest;

/// Listener invoked once per settled turn.
pub type SettleListener<T> = Box<dyn FnMut(&Settlement<T>) + Send + 'static>;

/// Record of one completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement<T> {
    /// Settled value before the turn started.
    pub previous: T,
    /// Settled value after the turn.
    pub current: T,
    /// Number of requests drained during the turn.
    pub applied: usize,
    /// Count of settlements so far, including this one.
    pub generation: u64,
}

impl<T: PartialEq> Settlement<T> {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// A single value that only changes at turn boundaries.
///
/// Requests submitted via [`submit`](Self::submit) are queued; [`read`](Self::read)
/// keeps returning the last settled value until [`settle`](Self::settle) drains the
/// queue and notifies listeners exactly once.
pub struct StateCell<T> {
    settled: T,
    queue: UpdateQueue<T>,
    generation: u64,
    listeners: Vec<SettleListener<T>>,
}

impl<T> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            queue: UpdateQueue::new(),
            generation: 0,
            listeners: Vec::new(),
        }
    }

    /// Most recently settled value.
    pub fn read(&self) -> &T {
        &self.settled
    }

    pub fn submit(&mut self, request: UpdateRequest<T>) {
        self.queue.push(request);
    }

    pub fn set(&mut self, value: T) {
        self.submit(UpdateRequest::literal(value));
    }

    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(T) -> T + Send + 'static,
    {
        self.submit(UpdateRequest::update(f));
    }

    /// Requests waiting for the end of the current turn.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Abandon requests submitted after the first `mark` pending ones.
    pub(crate) fn discard_pending_from(&mut self, mark: usize) {
        self.queue.truncate(mark);
    }

    /// Register a listener for settled turns.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Settlement<T>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: Clone> StateCell<T> {
    /// Close the current turn.
    ///
    /// Returns `None` without notifying anyone when nothing was submitted.
    pub fn settle(&mut self) -> Option<Settlement<T>> {
        if self.queue.is_empty() {
            return None;
        }

        let previous = self.settled.clone();
        let (current, applied) = self.queue.drain_onto(previous.clone());
        self.settled = current.clone();
        self.generation += 1;

        let settlement = Settlement {
            previous,
            current,
            applied,
            generation: self.generation,
        };
        for listener in &mut self.listeners {
            listener(&settlement);
        }
        Some(settlement)
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCell")
            .field("settled", &self.settled)
            .field("pending", &self.queue.len())
            .field("generation", &self.generation)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn submit_does_not_touch_settled_value() {
        let mut cell = StateCell::new(0i64);
        cell.update(|v| v + 1);
        cell.set(40);
        assert_eq!(*cell.read(), 0);
        assert_eq!(cell.pending(), 2);
    }

    #[test]
    fn settle_applies_queue_and_bumps_generation() {
        let mut cell = StateCell::new(0i64);
        cell.update(|v| v + 1);
        cell.update(|v| v + 1);
        cell.update(|v| v + 1);

        let settlement = cell.settle().expect("turn had requests");
        assert_eq!(settlement.previous, 0);
        assert_eq!(settlement.current, 3);
        assert_eq!(settlement.applied, 3);
        assert_eq!(settlement.generation, 1);
        assert!(settlement.changed());
        assert_eq!(*cell.read(), 3);
        assert_eq!(cell.pending(), 0);
    }

    #[test]
    fn empty_turn_settles_nothing() {
        let mut cell = StateCell::new(7i64);
        assert!(cell.settle().is_none());
        assert_eq!(cell.generation(), 0);
        assert_eq!(*cell.read(), 7);
    }

    #[test]
    fn listeners_fire_once_per_turn() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut cell = StateCell::new(0i64);
        let counter = Arc::clone(&calls);
        cell.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for _ in 0..5 {
            cell.update(|v| v - 1);
        }
        cell.settle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cell.settle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unchanged_settlement_still_counts() {
        let mut cell = StateCell::new(0i64);
        cell.set(0);
        let settlement = cell.settle().expect("literal queued");
        assert!(!settlement.changed());
        assert_eq!(settlement.generation, 1);
    }
}
