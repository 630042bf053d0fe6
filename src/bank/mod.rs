//! Template bank configuration.
//!
//! The bank is the single external input of the generator: a YAML document
//! mapping topics to per-level template lists, plus the exam-builder
//! question-count table.

mod model;


pub use model::{DEFAULT_QUESTIONS_PER_TOPIC, ExamBuilder, TemplateBank, TopicTemplates};
