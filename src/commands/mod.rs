//! Command implementations for ticketgen.

mod generate;

pub use generate::cmd_generate;
