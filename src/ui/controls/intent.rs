use crate::counter::CounterIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsIntent {
    /// Tab: move focus right, wrapping to the first trigger.
    Next,
    /// Shift+Tab: move focus left, wrapping to the last trigger.
    Previous,
    /// Focus the trigger bound to an action (mouse click, shortcut key).
    Focus(CounterIntent),
}

impl Intent for ControlsIntent {}
