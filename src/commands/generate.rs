//! The generate command: template bank in, exam artifact out.

use crate::cli::{Cli, split_topics};
use ticketgen::bank::TemplateBank;
use ticketgen::error::{Result, TicketError};
use ticketgen::exam;
use ticketgen::fs::atomic_write;

/// Load the bank, assemble the exam, and write the artifact.
///
/// The artifact is indented JSON with non-ASCII characters preserved, so
/// topic names and the `∈` in answers stay readable in the output file.
pub fn cmd_generate(cli: Cli) -> Result<()> {
    let bank = TemplateBank::load(&cli.bank)?;
    let topics = split_topics(&cli.topics);

    let exam = exam::generate(&cli.level, &topics, &bank, cli.seed);

    let json = serde_json::to_string_pretty(&exam)?;
    atomic_write(&cli.out, json.as_bytes()).map_err(|source| TicketError::ArtifactWrite {
        path: cli.out.clone(),
        source,
    })?;

    println!("Saved: {}", cli.out.display());
    Ok(())
}
