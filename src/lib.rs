pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod script;
pub mod state;
pub mod ui;
