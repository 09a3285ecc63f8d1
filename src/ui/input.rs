use crate::counter::CounterIntent;
use crate::ui::app::App;
use crate::ui::controls::ControlsIntent;
use crate::ui::layout::trigger_at;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(CounterIntent),
    Controls(ControlsIntent),
    ActivateFocused,
    Quit,
}

/// One row of the key map. The footer renders `keys_label: description`.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub keys: &'static [KeyCode],
    pub keys_label: &'static str,
    pub description: &'static str,
    pub action: KeyAction,
}

/// Key map in footer order. Ctrl+C is handled separately and always quits.
pub const BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        keys: &[KeyCode::Char('+'), KeyCode::Char('='), KeyCode::Right],
        keys_label: "+/→",
        description: "Increment",
        action: KeyAction::Press(CounterIntent::Increment),
    },
    KeyBinding {
        keys: &[KeyCode::Char('-'), KeyCode::Left],
        keys_label: "-/←",
        description: "Decrement",
        action: KeyAction::Press(CounterIntent::Decrement),
    },
    KeyBinding {
        keys: &[KeyCode::Char('r'), KeyCode::Char('0')],
        keys_label: "r/0",
        description: "Reset",
        action: KeyAction::Press(CounterIntent::Reset),
    },
    KeyBinding {
        keys: &[KeyCode::Tab],
        keys_label: "Tab",
        description: "Focus",
        action: KeyAction::Controls(ControlsIntent::Next),
    },
    KeyBinding {
        keys: &[KeyCode::BackTab],
        keys_label: "S-Tab",
        description: "Back",
        action: KeyAction::Controls(ControlsIntent::Previous),
    },
    KeyBinding {
        keys: &[KeyCode::Enter, KeyCode::Char(' ')],
        keys_label: "Enter",
        description: "Press",
        action: KeyAction::ActivateFocused,
    },
    KeyBinding {
        keys: &[KeyCode::Char('q'), KeyCode::Esc],
        keys_label: "q",
        description: "Quit",
        action: KeyAction::Quit,
    },
];

pub fn binding_for(code: KeyCode) -> Option<&'static KeyBinding> {
    BINDINGS.iter().find(|binding| binding.keys.contains(&code))
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let Some(binding) = binding_for(key.code) else {
        return;
    };
    match binding.action {
        KeyAction::Press(intent) => press(app, intent),
        KeyAction::Controls(intent) => app.dispatch_controls(intent),
        KeyAction::ActivateFocused => app.activate_focused(),
        KeyAction::Quit => app.request_quit(),
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(size) = app.size() else {
        return;
    };
    if let Some(intent) = trigger_at(size, mouse.column, mouse.row) {
        press(app, intent);
    }
}

/// Shortcut keys and clicks move focus to the trigger they activate.
fn press(app: &mut App, intent: CounterIntent) {
    app.dispatch_controls(ControlsIntent::Focus(intent));
    app.activate(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
