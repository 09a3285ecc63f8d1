//! The counter component.
//!
//! Owns one `i64` cell starting at zero. Every dispatched intent is one turn:
//! the matching handler queues its requests, the cell settles once, and the
//! host re-renders from [`Counter::render`].

mod handlers;
mod intent;
mod record;
mod view;

pub use handlers::{decrement, handle, increment, reset};
pub use intent::CounterIntent;
pub use record::{TurnLog, TurnRecord};
pub use view::{ViewNode, ViewTree, CONTAINER_CLASS, DISPLAY_CLASS, TRIGGER_CLASS};

use crate::state::{Settlement, StateCell};

pub struct Counter {
    count: StateCell<i64>,
}

impl Counter {
    pub fn new() -> Self {
        let mut count = StateCell::new(0);
        count.subscribe(|settled: &Settlement<i64>| {
            tracing::debug!(
                previous = settled.previous,
                count = settled.current,
                applied = settled.applied,
                generation = settled.generation,
                "turn settled"
            );
        });
        Self { count }
    }

    /// Settled count.
    pub fn read(&self) -> i64 {
        *self.count.read()
    }

    /// Number of re-render notifications fired so far.
    pub fn generation(&self) -> u64 {
        self.count.generation()
    }

    /// Run the handler for `intent` as a single turn.
    pub fn dispatch(&mut self, intent: CounterIntent) -> Option<Settlement<i64>> {
        tracing::debug!(action = intent.name(), "dispatch");
        self.count.turn(|count| handle(intent, count))
    }

    pub fn render(&self) -> ViewTree {
        ViewTree::counter(self.read())
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
