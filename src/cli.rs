//! Command-line interface definitions for News Digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the News Digest application.
///
/// # Examples
///
/// ```sh
/// # Five results (the default) about solar power from the last ~60 days
/// news_digest "solar power" 2
///
/// # Cap the search at ten articles
/// news_digest "solar power" 2 --max_results 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Keyword for news search
    pub keyword: String,

    /// Number of months from today to search (30 days per month)
    pub months: u32,

    /// Maximum number of news results
    #[arg(
        long = "max_results",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_arguments() {
        let cli = Cli::parse_from(["news_digest", "solar power", "2"]);

        assert_eq!(cli.keyword, "solar power");
        assert_eq!(cli.months, 2);
        assert_eq!(cli.max_results, 5);
    }

    #[test]
    fn test_cli_max_results_flag() {
        let cli = Cli::parse_from(["news_digest", "elections", "0", "--max_results", "9"]);

        assert_eq!(cli.keyword, "elections");
        assert_eq!(cli.months, 0);
        assert_eq!(cli.max_results, 9);
    }

    #[test]
    fn test_cli_rejects_zero_max_results() {
        let result = Cli::try_parse_from(["news_digest", "elections", "1", "--max_results", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_negative_months() {
        let result = Cli::try_parse_from(["news_digest", "elections", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_keyword_and_months() {
        assert!(Cli::try_parse_from(["news_digest"]).is_err());
        assert!(Cli::try_parse_from(["news_digest", "elections"]).is_err());
    }
}
