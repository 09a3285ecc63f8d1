//! Trigger focus for keyboard navigation.
//!
//! Uses the MVI pattern:
//! - `state.rs` - which trigger has focus
//! - `intent.rs` - focus movement (Next, Previous, Focus)
//! - `reducer.rs` - wrapping transitions over the counter's triggers

mod intent;
mod reducer;
mod state;

pub use intent::ControlsIntent;
pub use reducer::ControlsReducer;
pub use state::ControlsState;
