use std::collections::VecDeque;

use serde::Serialize;

use crate::state::Settlement;

use super::intent::CounterIntent;

/// One dispatched action and the settlement it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: u64,
    pub action: CounterIntent,
    pub previous: i64,
    pub count: i64,
    pub applied: usize,
    pub generation: u64,
}

impl TurnRecord {
    pub fn new(turn: u64, action: CounterIntent, settlement: &Settlement<i64>) -> Self {
        Self {
            turn,
            action,
            previous: settlement.previous,
            count: settlement.current,
            applied: settlement.applied,
            generation: settlement.generation,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "#{} {}: {} -> {} ({} queued)",
            self.turn,
            self.action.name(),
            self.previous,
            self.count,
            self.applied
        )
    }
}

/// Most recent turns, newest last, bounded by `capacity`.
#[derive(Debug, Clone)]
pub struct TurnLog {
    entries: VecDeque<TurnRecord>,
    capacity: usize,
}

impl TurnLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: TurnRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TurnRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
