use super::cell::{Settlement, StateCell};
use super::request::UpdateRequest;

/// Submission-only view of a cell, handed to handlers for the duration of a turn.
///
/// A handler cannot settle the cell or observe pending work; it can only queue.
pub struct Setter<'a, T> {
    cell: &'a mut StateCell<T>,
}

impl<'a, T> Setter<'a, T> {
    pub fn submit(&mut self, request: UpdateRequest<T>) {
        self.cell.submit(request);
    }

    pub fn set(&mut self, value: T) {
        self.cell.set(value);
    }

    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(T) -> T + Send + 'static,
    {
        self.cell.update(f);
    }
}

/// Rolls the queue back to `mark` if the handler unwinds mid-turn.
struct AbortOnUnwind<'a, T> {
    cell: &'a mut StateCell<T>,
    mark: usize,
}

impl<T> Drop for AbortOnUnwind<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.cell.discard_pending_from(self.mark);
        }
    }
}

impl<T: Clone> StateCell<T> {
    /// Run one turn: the handler queues requests, then the cell settles once.
    ///
    /// If the handler panics, whatever it submitted is discarded before the
    /// panic propagates, so the next turn starts from a clean queue.
    pub fn turn<F>(&mut self, handler: F) -> Option<Settlement<T>>
    where
        F: FnOnce(&mut Setter<'_, T>),
    {
        let mark = self.pending();
        {
            let mut guard = AbortOnUnwind { cell: self, mark };
            handler(&mut Setter { cell: &mut *guard.cell });
        }
        self.settle()
    }
}
