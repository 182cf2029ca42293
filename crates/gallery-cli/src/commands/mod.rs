//! Subcommand implementations.

pub mod images;
pub mod serve;
