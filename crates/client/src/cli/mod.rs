//! CLI command definitions.

pub mod feed;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Browse the local events demo from the terminal.
#[derive(Debug, Parser)]
#[command(name = "eventfeed")]
#[command(version, about = "Browse local events as a map, a calendar or a feed", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "EVENTFEED_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Only log warnings and errors (RUST_LOG still takes precedence).
    #[arg(long)]
    pub quiet: bool,

    /// Date the demo events are seeded from (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Seed this many events, cycling through the demo list.
    #[arg(long)]
    pub count: Option<u32>,

    /// Use UTC instead of the local time zone (`--utc=false` forces local).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub utc: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every event as a map pin, in insertion order.
    Map,
    /// Show events grouped by calendar day.
    Calendar,
    /// Show the sortable event feed.
    Feed(feed::FeedCommand),
    /// Show the details of one event.
    Show(feed::ShowCommand),
    /// List the feed sort options.
    Sorts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed::SortArg;

    #[test]
    fn test_parse_feed_with_sort() {
        let cli = Cli::try_parse_from(["eventfeed", "--utc", "feed", "--sort", "fun-score"]).unwrap();

        assert_eq!(cli.utc, Some(true));
        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Feed(cmd) => assert_eq!(cmd.sort, Some(SortArg::FunScore)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "eventfeed",
            "--format",
            "json",
            "--today",
            "2024-06-15",
            "calendar",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(cli.utc, None);
        assert_eq!(cli.count, None);
        assert!(matches!(cli.command, Commands::Calendar));
    }

    #[test]
    fn test_parse_utc_and_count() {
        let cli = Cli::try_parse_from(["eventfeed", "--utc=false", "--count", "12", "map"]).unwrap();

        assert_eq!(cli.utc, Some(false));
        assert_eq!(cli.count, Some(12));
        assert!(matches!(cli.command, Commands::Map));
    }

    #[test]
    fn test_parse_show_target() {
        let cli = Cli::try_parse_from(["eventfeed", "show", "3"]).unwrap();
        match cli.command {
            Commands::Show(cmd) => assert_eq!(cmd.target, "3"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["eventfeed", "feed", "--sort", "price"]).is_err());
    }
}
