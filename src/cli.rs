use std::path::PathBuf;

use clap::Parser;

/// Counter that batches three queued updaters per click.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/tally/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Run headless: comma-separated actions (increment, decrement, reset)
    #[arg(long, value_name = "ACTIONS")]
    pub script: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "tally",
            "--config",
            "/tmp/tally.toml",
            "--log-file",
            "/tmp/tally.log",
            "--script",
            "inc,reset",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tally.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/tally.log")));
        assert_eq!(cli.script.as_deref(), Some("inc,reset"));
    }

    #[test]
    fn no_flags_means_interactive() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.script.is_none());
        assert!(cli.config.is_none());
    }
}
