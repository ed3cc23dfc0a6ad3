use std::env;

use chrono::NaiveDate;
use eventfeed_core::events::SortCriterion;

use crate::cli::Cli;

/// Defaults loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Feed order when no `--sort` is given (default: date)
    pub default_sort: SortCriterion,
    /// Seed anchor date (default: today's local date)
    pub today: Option<NaiveDate>,
    /// Use UTC for seeding and day grouping (default: false, local time zone)
    pub utc: bool,
    /// Number of demo events to seed (default: the six originals)
    pub seed_count: Option<u32>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTFEED_DEFAULT_SORT` - `date`, `cost` or `fun-score` (default: date)
    /// - `EVENTFEED_TODAY` - Seed anchor date, YYYY-MM-DD (default: today)
    /// - `EVENTFEED_UTC` - `1` or `true` to work in UTC (default: false)
    /// - `EVENTFEED_SEED_COUNT` - Number of demo events to seed (default: 6 originals)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            default_sort: lookup("EVENTFEED_DEFAULT_SORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            today: lookup("EVENTFEED_TODAY")
                .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok()),
            utc: lookup("EVENTFEED_UTC")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            seed_count: lookup("EVENTFEED_SEED_COUNT").and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Applies command line flags on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.today.is_some() {
            self.today = cli.today;
        }
        if let Some(utc) = cli.utc {
            self.utc = utc;
        }
        if cli.count.is_some() {
            self.seed_count = cli.count;
        }
        self
    }

    /// The seed anchor date, defaulting to the current local date.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.default_sort, SortCriterion::Date);
        assert_eq!(config.today, None);
        assert!(!config.utc);
        assert_eq!(config.seed_count, None);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("EVENTFEED_DEFAULT_SORT", "fun-score"),
            ("EVENTFEED_TODAY", "2024-06-15"),
            ("EVENTFEED_UTC", "TRUE"),
            ("EVENTFEED_SEED_COUNT", "24"),
        ]));

        assert_eq!(config.default_sort, SortCriterion::FunScore);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(config.utc);
        assert_eq!(config.seed_count, Some(24));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("EVENTFEED_DEFAULT_SORT", "price"),
            ("EVENTFEED_TODAY", "June 15"),
            ("EVENTFEED_UTC", "maybe"),
            ("EVENTFEED_SEED_COUNT", "-3"),
        ]));

        assert_eq!(config, Config::from_lookup(|_| None));
    }

    #[test]
    fn test_cli_overrides_environment() {
        let config = Config::from_lookup(lookup_from(&[("EVENTFEED_TODAY", "2024-01-01")]));
        let cli = Cli::try_parse_from(["eventfeed", "--today", "2024-06-15", "--utc", "map"]).unwrap();

        let config = config.with_cli(&cli);

        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert!(config.utc);
    }

    #[test]
    fn test_cli_can_turn_utc_back_off() {
        let config = Config::from_lookup(lookup_from(&[
            ("EVENTFEED_UTC", "1"),
            ("EVENTFEED_SEED_COUNT", "30"),
        ]));
        let cli = Cli::try_parse_from(["eventfeed", "--utc=false", "--count", "8", "map"]).unwrap();

        let config = config.with_cli(&cli);

        assert!(!config.utc);
        assert_eq!(config.seed_count, Some(8));
    }

    #[test]
    fn test_cli_without_utc_keeps_environment() {
        let config = Config::from_lookup(lookup_from(&[("EVENTFEED_UTC", "yes")]));
        let cli = Cli::try_parse_from(["eventfeed", "map"]).unwrap();

        assert!(config.with_cli(&cli).utc);
    }
}
