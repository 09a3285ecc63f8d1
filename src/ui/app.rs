use crate::config::UiConfig;
use crate::counter::{Counter, CounterIntent, TurnLog, TurnRecord, ViewTree};
use crate::ui::controls::{ControlsIntent, ControlsReducer, ControlsState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Host-side application state around the counter component.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    counter: Counter,
    /// Trigger focus (MVI pattern).
    controls: ControlsState,
    turn_log: TurnLog,
    show_turn_log: bool,
    turns: u64,
    /// Set by a settled turn, a resize or a focus change; cleared by `take_redraw`.
    needs_redraw: bool,
    renders: u64,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            counter: Counter::new(),
            controls: ControlsState::default(),
            turn_log: TurnLog::new(config.turn_log_capacity),
            show_turn_log: config.show_turn_log,
            turns: 0,
            needs_redraw: true,
            renders: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.needs_redraw = true;
    }

    /// Activate a trigger: one handler invocation, one turn, at most one redraw.
    pub fn activate(&mut self, intent: CounterIntent) {
        self.turns += 1;
        let Some(settlement) = self.counter.dispatch(intent) else {
            return;
        };
        self.turn_log
            .push(TurnRecord::new(self.turns, intent, &settlement));
        self.needs_redraw = true;
    }

    pub fn activate_focused(&mut self) {
        self.activate(self.controls.focused_intent());
    }

    /// Dispatch an intent to the controls reducer.
    pub fn dispatch_controls(&mut self, intent: ControlsIntent) {
        let before = self.controls;
        dispatch_mvi!(self, controls, ControlsReducer, intent);
        if self.controls != before {
            self.needs_redraw = true;
        }
    }

    pub fn controls(&self) -> &ControlsState {
        &self.controls
    }

    pub fn count(&self) -> i64 {
        self.counter.read()
    }

    /// Settled turns so far.
    pub fn generation(&self) -> u64 {
        self.counter.generation()
    }

    pub fn view(&self) -> ViewTree {
        self.counter.render()
    }

    pub fn turn_log(&self) -> &TurnLog {
        &self.turn_log
    }

    pub fn show_turn_log(&self) -> bool {
        self.show_turn_log
    }

    /// Number of frames drawn so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Returns true (and counts a render) if a redraw is pending.
    pub fn take_redraw(&mut self) -> bool {
        if !self.needs_redraw {
            return false;
        }
        self.needs_redraw = false;
        self.renders += 1;
        true
    }
}
