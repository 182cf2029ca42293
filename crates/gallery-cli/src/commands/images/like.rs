//! Like image command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use gallery_core::{Gallery, ImageId, LikeImageInput};

use crate::config::SeedConfig;
use crate::output;

#[derive(Args, Debug)]
pub struct LikeArgs {
    /// Id of the image to like or unlike
    pub image_id: String,

    /// Correlation token echoed in the response
    #[arg(long)]
    pub client_mutation_id: Option<String>,

    /// Write the updated collection back to the seed file
    #[arg(long)]
    pub save: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: LikeArgs, seed: Option<&Path>) -> Result<()> {
    let config = SeedConfig::resolve(seed)?;
    let gallery = config.open()?;

    let image_id = ImageId::new(&args.image_id).context("Invalid image id")?;
    let input = LikeImageInput {
        image_id,
        client_mutation_id: args.client_mutation_id,
    };

    let payload = gallery
        .like_image(input)
        .await
        .context("Failed to like image")?;

    // Save before printing the payload
    if args.save {
        gallery
            .save(&config.save_path)
            .await
            .with_context(|| format!("Failed to save {}", config.save_path.display()))?;
    }

    output::json_with(&payload, args.pretty)?;

    if args.save {
        output::success("Saved");
        output::field("Seed", &config.save_path.display().to_string());
    }

    Ok(())
}
