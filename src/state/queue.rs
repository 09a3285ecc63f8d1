use std::collections::VecDeque;

use super::request::UpdateRequest;

/// Ordered requests collected during one turn.
#[derive(Debug)]
pub struct UpdateQueue<T> {
    requests: VecDeque<UpdateRequest<T>>,
}

impl<T> UpdateQueue<T> {
    pub fn new() -> Self {
        Self {
            requests: VecDeque::new(),
        }
    }

    pub fn push(&mut self, request: UpdateRequest<T>) {
        self.requests.push_back(request);
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Drop every request queued after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.requests.truncate(len);
    }

    /// Drain every queued request onto `base` in submission order.
    ///
    /// Returns the final working value and the number of requests applied.
    pub fn drain_onto(&mut self, base: T) -> (T, usize) {
        let applied = self.requests.len();
        let value = self
            .requests
            .drain(..)
            .fold(base, |working, request| request.apply(working));
        (value, applied)
    }
}

impl<T> Default for UpdateQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
