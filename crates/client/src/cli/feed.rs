//! Feed and detail CLI commands.

use clap::{Parser, ValueEnum};

// Re-export core SortCriterion for callers mapping CLI values
pub use eventfeed_core::events::SortCriterion as CoreSortCriterion;

/// Feed options.
#[derive(Debug, Parser)]
pub struct FeedCommand {
    /// Sort order. Falls back to EVENTFEED_DEFAULT_SORT, then date.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

/// Detail view options.
#[derive(Debug, Parser)]
pub struct ShowCommand {
    /// Event ID, or a 1-based position in the feed.
    pub target: String,

    /// Sort order used to resolve a feed position.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

/// CLI sort criterion (with clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Cost,
    FunScore,
}

impl From<SortArg> for CoreSortCriterion {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => CoreSortCriterion::Date,
            SortArg::Cost => CoreSortCriterion::Cost,
            SortArg::FunScore => CoreSortCriterion::FunScore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_arg_into_core() {
        assert_eq!(CoreSortCriterion::from(SortArg::Date), CoreSortCriterion::Date);
        assert_eq!(CoreSortCriterion::from(SortArg::Cost), CoreSortCriterion::Cost);
        assert_eq!(
            CoreSortCriterion::from(SortArg::FunScore),
            CoreSortCriterion::FunScore
        );
    }
}
