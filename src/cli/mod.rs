//! CLI argument parsing for ticketgen.
//!
//! Uses clap derive macros for declarative argument definitions; the
//! actual work happens in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Generate a randomized algebra exam ticket from a template bank.
#[derive(Parser, Debug)]
#[command(name = "ticketgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subject level to generate questions for.
    #[arg(long)]
    pub level: String,

    /// Topics to draw from, separated by ';' or ','.
    #[arg(long)]
    pub topics: String,

    /// Template bank file.
    #[arg(long, default_value = "data/themes_levels.yaml")]
    pub bank: PathBuf,

    /// Where to write the exam artifact.
    #[arg(long, default_value = "reports/sample_ticket.json")]
    pub out: PathBuf,

    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Split a raw topic list on `;` or `,`, trimming entries and dropping
/// empties. The two separators are interchangeable.
pub fn split_topics(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_minimal_invocation_with_defaults() {
        let cli =
            Cli::try_parse_from(["ticketgen", "--level", "basic", "--topics", "linear"]).unwrap();

        assert_eq!(cli.level, "basic");
        assert_eq!(cli.topics, "linear");
        assert_eq!(cli.bank, PathBuf::from("data/themes_levels.yaml"));
        assert_eq!(cli.out, PathBuf::from("reports/sample_ticket.json"));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_an_explicit_seed() {
        let cli = Cli::try_parse_from([
            "ticketgen", "--level", "basic", "--topics", "linear", "--seed", "42",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn rejects_a_missing_level() {
        assert!(Cli::try_parse_from(["ticketgen", "--topics", "linear"]).is_err());
    }

    #[test]
    fn splits_topics_on_both_separators() {
        assert_eq!(
            split_topics("algebra; geometry,trigonometry"),
            ["algebra", "geometry", "trigonometry"]
        );
    }

    #[test]
    fn drops_empty_topic_entries() {
        assert_eq!(split_topics(" ; ,algebra, "), ["algebra"]);
        assert!(split_topics("").is_empty());
    }
}
