use std::fmt;

/// Boxed updater closure: pending value in, next value out.
pub type Updater<T> = Box<dyn FnOnce(T) -> T + Send + 'static>;

/// A single request queued against a [`StateCell`](super::StateCell).
pub enum UpdateRequest<T> {
    /// Replace the working value outright.
    ///
    /// Anything queued earlier in the same turn is discarded by the overwrite.
    Literal(T),
    /// Compute the next working value from the pending one.
    Update(Updater<T>),
}

impl<T> UpdateRequest<T> {
    pub fn literal(value: T) -> Self {
        Self::Literal(value)
    }

    pub fn update<F>(f: F) -> Self
    where
        F: FnOnce(T) -> T + Send + 'static,
    {
        Self::Update(Box::new(f))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Apply this request to the working value of the current turn.
    pub fn apply(self, working: T) -> T {
        match self {
            Self::Literal(value) => value,
            Self::Update(f) => f(working),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UpdateRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Update(_) => f.write_str("Update(<fn>)"),
        }
    }
}
