//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

use tally::state::StateCell;

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Run a turn of `n` identical `+delta` updaters.
pub fn turn_of_updates(cell: &mut StateCell<i64>, n: usize, delta: i64) -> i64 {
    cell.turn(|set| {
        for _ in 0..n {
            set.update(move |v| v + delta);
        }
    });
    *cell.read()
}
