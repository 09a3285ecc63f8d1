//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses, clicks on triggers) or
/// host events. Reducers and components consume them.
pub trait Intent: Send + 'static {}
