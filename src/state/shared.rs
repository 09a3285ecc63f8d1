//! Thread-safe handle around a [`StateCell`].
//!
//! The whole turn (handler submissions plus settlement) runs under one lock
//! acquisition, so turns from different threads never interleave.

use std::sync::Arc;

use parking_lot::Mutex;

use super::cell::{Settlement, StateCell};
use super::turn::Setter;

pub struct SharedCell<T> {
    inner: Arc<Mutex<StateCell<T>>>,
}

impl<T> SharedCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StateCell::new(initial))),
        }
    }

    pub fn generation(&self) -> u64 {
        self.inner.lock().generation()
    }

    /// Register a listener for settled turns.
    ///
    /// Listeners run while the cell's lock is held. A listener must not call
    /// back into the same `SharedCell` (`read`, `turn`, `subscribe`); that
    /// deadlocks. Use the `Settlement` argument, or forward it elsewhere.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: FnMut(&Settlement<T>) + Send + 'static,
    {
        self.inner.lock().subscribe(listener);
    }
}

impl<T: Clone> SharedCell<T> {
    pub fn read(&self) -> T {
        self.inner.lock().read().clone()
    }

    pub fn turn<F>(&self, handler: F) -> Option<Settlement<T>>
    where
        F: FnOnce(&mut Setter<'_, T>),
    {
        self.inner.lock().turn(handler)
    }
}

impl<T> Clone for SharedCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
