//! Headless host: drives the counter from a list of action tokens and prints
//! one JSON line per settled turn.

use std::io::{self, Write};

use thiserror::Error;

use crate::counter::{Counter, CounterIntent, TurnRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown action '{token}' at position {position} (expected increment, decrement or reset)")]
    UnknownAction { token: String, position: usize },
}

/// Split on commas and whitespace; positions are 1-based.
pub fn parse_script(script: &str) -> Result<Vec<CounterIntent>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            CounterIntent::from_token(token).ok_or_else(|| ScriptError::UnknownAction {
                token: token.to_string(),
                position: idx + 1,
            })
        })
        .collect()
}

/// Dispatch every intent as its own turn, writing a JSON record after each.
pub fn run_script<W: Write>(intents: &[CounterIntent], out: &mut W) -> io::Result<Vec<TurnRecord>> {
    let mut counter = Counter::new();
    let mut records = Vec::with_capacity(intents.len());

    for (idx, &intent) in intents.iter().enumerate() {
        let Some(settlement) = counter.dispatch(intent) else {
            continue;
        };
        let record = TurnRecord::new(idx as u64 + 1, intent, &settlement);
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")?;
        records.push(record);
    }

    out.flush()?;
    tracing::info!(
        turns = records.len(),
        count = counter.read(),
        "script finished"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators() {
        let intents = parse_script("inc, +  dec,reset").unwrap();
        assert_eq!(
            intents,
            vec![
                CounterIntent::Increment,
                CounterIntent::Increment,
                CounterIntent::Decrement,
                CounterIntent::Reset,
            ]
        );
    }

    #[test]
    fn empty_script_is_empty() {
        assert!(parse_script("  , ,").unwrap().is_empty());
    }

    #[test]
    fn unknown_token_reports_position() {
        let err = parse_script("inc,triple,dec").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownAction {
                token: "triple".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn writes_one_line_per_turn() {
        let mut out = Vec::new();
        let records = run_script(
            &[CounterIntent::Increment, CounterIntent::Reset],
            &mut out,
        )
        .unwrap();
        assert_eq!(records.len(), 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#"{"turn":1,"action":"increment","previous":0,"count":3,"applied":3,"generation":1}"#
        );
        assert_eq!(
            lines[1],
            r#"{"turn":2,"action":"reset","previous":3,"count":0,"applied":1,"generation":2}"#
        );
    }
}
