//! Templated algebra exam ticket generation.
//!
//! Given a subject level and a set of topics, `ticketgen` instantiates
//! randomized problems from a YAML template bank and computes their exact
//! real solution sets with a small symbolic interpreter.
//!
//! The pipeline, leaves first: [`values`] draws placeholder values from
//! named numeric domains, [`template`] substitutes them into template text,
//! [`solve`] parses the filled text and describes its solution set, and
//! [`exam`] folds everything into the serializable exam record.
//!
//! All randomness flows through one explicitly threaded, seedable source;
//! a fixed seed yields a byte-identical exam artifact across runs.

pub mod bank;
pub mod error;
pub mod exam;
pub mod fs;
pub mod solve;
pub mod template;
pub mod values;
