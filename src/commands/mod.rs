//! CLI subcommands

pub mod list;
pub mod related;
pub mod stats;
