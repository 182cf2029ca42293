//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::images::ImagesCommand;
use crate::commands::serve::ServeArgs;

/// Image gallery with cursor pagination.
#[derive(Parser, Debug)]
#[command(name = "gallery")]
#[command(author, version = env!("GALLERY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Seed file (JSON array of images)
    #[arg(long, global = true, env = "GALLERY_SEED")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Image listing and like operations
    Images(ImagesCommand),

    /// Serve JSON-lines requests on stdin/stdout
    Serve(ServeArgs),
}
