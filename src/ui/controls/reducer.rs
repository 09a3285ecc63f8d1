use crate::counter::CounterIntent;
use crate::ui::controls::intent::ControlsIntent;
use crate::ui::controls::state::ControlsState;
use crate::ui::mvi::Reducer;

pub struct ControlsReducer;

impl Reducer for ControlsReducer {
    type State = ControlsState;
    type Intent = ControlsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = CounterIntent::TRIGGERS.len();
        match intent {
            ControlsIntent::Next => {
                let focused = if state.focused + 1 >= len {
                    0
                } else {
                    state.focused + 1
                };
                ControlsState { focused }
            }
            ControlsIntent::Previous => {
                let focused = if state.focused == 0 {
                    len.saturating_sub(1)
                } else {
                    state.focused - 1
                };
                ControlsState { focused }
            }
            ControlsIntent::Focus(target) => CounterIntent::TRIGGERS
                .iter()
                .position(|&intent| intent == target)
                .map(|focused| ControlsState { focused })
                .unwrap_or(state),
        }
    }
}
