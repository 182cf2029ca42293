//! Image subcommand implementations.

mod like;
mod list;

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ImagesCommand {
    #[command(subcommand)]
    pub command: ImagesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ImagesSubcommand {
    /// List one page of images
    List(list::ListArgs),

    /// Toggle the like state of an image
    Like(like::LikeArgs),
}

pub async fn handle(cmd: ImagesCommand, seed: Option<&Path>) -> Result<()> {
    match cmd.command {
        ImagesSubcommand::List(args) => list::run(args, seed).await,
        ImagesSubcommand::Like(args) => like::run(args, seed).await,
    }
}
