use crate::counter::CounterIntent;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsState {
    /// Index into `CounterIntent::TRIGGERS`.
    pub focused: usize,
}

impl Default for ControlsState {
    /// Focus starts on Increment, the rightmost trigger.
    fn default() -> Self {
        Self {
            focused: CounterIntent::TRIGGERS.len() - 1,
        }
    }
}

impl UiState for ControlsState {}

impl ControlsState {
    pub fn focused_intent(&self) -> CounterIntent {
        CounterIntent::TRIGGERS[self.focused.min(CounterIntent::TRIGGERS.len() - 1)]
    }

    pub fn is_focused(&self, intent: CounterIntent) -> bool {
        self.focused_intent() == intent
    }
}
