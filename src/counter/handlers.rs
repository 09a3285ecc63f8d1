//! Action handlers.
//!
//! Each handler is a fixed sequence of submissions against the count cell.
//! None of them reads the cell, so the pending value is only ever seen by the
//! queued updaters themselves.

use crate::state::Setter;

use super::intent::CounterIntent;

/// Three `+1` updaters, applied against the pending value in turn.
pub fn increment(count: &mut Setter<'_, i64>) {
    count.update(|prev| prev + 1);
    count.update(|prev| prev + 1);
    count.update(|prev| prev + 1);
}

pub fn decrement(count: &mut Setter<'_, i64>) {
    count.update(|prev| prev - 1);
    count.update(|prev| prev - 1);
    count.update(|prev| prev - 1);
}

/// Literal, not an updater: discards anything queued before it in the same turn.
pub fn reset(count: &mut Setter<'_, i64>) {
    count.set(0);
}

pub fn handle(intent: CounterIntent, count: &mut Setter<'_, i64>) {
    match intent {
        CounterIntent::Increment => increment(count),
        CounterIntent::Decrement => decrement(count),
        CounterIntent::Reset => reset(count),
    }
}
