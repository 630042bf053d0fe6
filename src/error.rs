//! Error types for ticketgen.
//!
//! Uses thiserror for derive macros and keeps messages user-actionable;
//! `main` prints them verbatim and exits with a generic failure status.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: bank loading and artifact writing.
///
/// Per-question solve failures are deliberately not represented here.
/// They surface as a null `answer` on the affected question and the
/// generation run continues.
#[derive(Debug, Error)]
pub enum TicketError {
    /// The template bank file could not be read.
    #[error("failed to read template bank '{}': {source}", path.display())]
    BankRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template bank file does not match the bank schema.
    #[error("template bank '{}' is malformed: {source}", path.display())]
    BankParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The exam record could not be serialized.
    #[error("failed to serialize exam: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The exam artifact could not be written.
    #[error("failed to write exam artifact '{}': {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for ticketgen operations.
pub type Result<T> = std::result::Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_read_message_names_the_path() {
        let err = TicketError::BankRead {
            path: PathBuf::from("data/themes_levels.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/themes_levels.yaml"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn artifact_write_message_names_the_path() {
        let err = TicketError::ArtifactWrite {
            path: PathBuf::from("reports/sample_ticket.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("reports/sample_ticket.json"));
    }
}
