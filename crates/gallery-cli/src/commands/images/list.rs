//! List images command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use gallery_core::{Cursor, Gallery, ListImagesInput};

use crate::config::SeedConfig;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of images to return (0 means no limit)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Resume after this cursor
    #[arg(long)]
    pub after: Option<String>,

    /// Case-insensitive title substring
    #[arg(long)]
    pub title_contains: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, seed: Option<&Path>) -> Result<()> {
    let config = SeedConfig::resolve(seed)?;
    let gallery = config.open()?;

    // Blank tokens are rejected here; unknown ones restart from the first page
    let after = args
        .after
        .map(Cursor::parse)
        .transpose()
        .context("Invalid --after cursor")?;

    let input = ListImagesInput {
        limit: args.limit,
        after,
        title_contains: args.title_contains,
    };

    let connection = gallery
        .list_images(&input)
        .await
        .context("Failed to list images")?;

    output::json_with(&connection, args.pretty)?;

    if connection.is_empty() {
        output::hint("No images found.");
    }

    if let Some(cursor) = connection.next_cursor() {
        output::field("Next cursor", cursor.as_str());
    }

    Ok(())
}
