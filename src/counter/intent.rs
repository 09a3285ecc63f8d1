use serde::Serialize;

use crate::ui::mvi::Intent;

/// User actions accepted by the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterIntent {
    Decrement,
    Reset,
    Increment,
}

impl Intent for CounterIntent {}

impl CounterIntent {
    /// Trigger order as laid out in the view.
    pub const TRIGGERS: [CounterIntent; 3] = [
        CounterIntent::Decrement,
        CounterIntent::Reset,
        CounterIntent::Increment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CounterIntent::Decrement => "Decrement",
            CounterIntent::Reset => "Reset",
            CounterIntent::Increment => "Increment",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CounterIntent::Decrement => "decrement",
            CounterIntent::Reset => "reset",
            CounterIntent::Increment => "increment",
        }
    }

    /// Parse a script token. Accepts full names, short names and symbols.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "increment" | "inc" | "+" => Some(CounterIntent::Increment),
            "decrement" | "dec" | "-" => Some(CounterIntent::Decrement),
            "reset" | "r" | "0" => Some(CounterIntent::Reset),
            _ => None,
        }
    }
}
