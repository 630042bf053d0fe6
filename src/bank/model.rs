//! Template bank model.
//!
//! Represents the bank document:
//! `topics.<topic>.templates.<level> -> [string]` and
//! `exam_builder.questions_per_topic.<level> -> integer`.
//! Parsing is forward-compatible: unknown fields are ignored and missing
//! sections default to empty. The bank is loaded once per invocation and
//! immutable afterwards.

use crate::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Questions generated per topic when a level has no explicit entry.
pub const DEFAULT_QUESTIONS_PER_TOPIC: u32 = 2;

/// Templates for one topic, keyed by level name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicTemplates {
    pub templates: HashMap<String, Vec<String>>,
}

/// Exam assembly settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamBuilder {
    pub questions_per_topic: HashMap<String, u32>,
}

/// The full template bank document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateBank {
    pub topics: HashMap<String, TopicTemplates>,
    pub exam_builder: ExamBuilder,
}

impl TemplateBank {
    /// Load a bank from a YAML file.
    ///
    /// A missing or malformed file is fatal: nothing meaningful can be
    /// generated without a bank.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TicketError::BankRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| TicketError::BankParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Templates for a topic at a level; `None` when either is absent.
    pub fn templates_for(&self, topic: &str, level: &str) -> Option<&[String]> {
        self.topics
            .get(topic)
            .and_then(|entry| entry.templates.get(level))
            .map(Vec::as_slice)
    }

    /// Number of questions to generate per topic at `level`.
    pub fn questions_per_topic(&self, level: &str) -> u32 {
        self.exam_builder
            .questions_per_topic
            .get(level)
            .copied()
            .unwrap_or(DEFAULT_QUESTIONS_PER_TOPIC)
    }
}
