//! Base trait for UI state.

/// Marker trait for UI state snapshots.
///
/// States are cloned to produce new states and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
