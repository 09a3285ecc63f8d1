//! Turn-batched state cells.
//!
//! ```text
//! handler ──submit──→ UpdateQueue ──settle──→ settled value ──→ listeners
//!                     (Literal | Update)      (once per turn)
//! ```
//!
//! - **UpdateRequest**: tagged request, literal replacement or updater closure
//! - **UpdateQueue**: per-turn FIFO, drained in submission order
//! - **StateCell**: settled value plus queue; `read()` never exposes a half-applied turn
//! - **SharedCell**: mutex-guarded cell for hosts that dispatch from several threads

mod cell;
mod queue;
mod request;
mod shared;
mod turn;

pub use cell::{SettleListener, Settlement, StateCell};
pub use queue::UpdateQueue;
pub use request::{UpdateRequest, Updater};
pub use shared::SharedCell;
pub use turn::Setter;
