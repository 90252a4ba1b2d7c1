//! CLI interface for Porta.
//!
//! The binary is the interactive showcase; the flags pick a start view,
//! force the offline assistant, or render one non-interactive frame for
//! docs and scripts.

use clap::Parser;

use crate::model::View;

/// Porta — interactive showcase for the smart delivery box.
#[derive(Debug, Parser)]
#[command(name = "porta")]
pub struct Cli {
    /// View to open at startup.
    #[arg(long, value_enum, default_value = "home")]
    pub view: View,

    /// Answer chat questions from the built-in canned table instead of the
    /// hosted API, even when an API key is configured.
    #[arg(long)]
    pub offline: bool,

    /// Render one frame of the given view to stdout and exit.
    #[arg(long, value_name = "VIEW", value_enum)]
    pub snapshot: Option<View>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_home_view() {
        let cli = Cli::parse_from(["porta"]);
        assert_eq!(cli.view, View::Home);
        assert!(!cli.offline);
        assert!(cli.snapshot.is_none());
    }

    #[test]
    fn view_and_snapshot_take_view_names() {
        let cli = Cli::parse_from(["porta", "--view", "lab", "--snapshot", "dashboard"]);
        assert_eq!(cli.view, View::Lab);
        assert_eq!(cli.snapshot, Some(View::Dashboard));
    }

    #[test]
    fn offline_flag_parses() {
        let cli = Cli::parse_from(["porta", "--offline"]);
        assert!(cli.offline);
    }
}
