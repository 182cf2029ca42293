//! Seed file resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use gallery_memory::{MemoryGallery, SeedSource};

const DATA_FILE: &str = "images.json";

/// Where the collection is loaded from and where `--save` writes it.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub source: SeedSource,
    pub save_path: PathBuf,
}

impl SeedConfig {
    /// Resolve the seed: explicit path, then the per-user data file if it
    /// exists, then the built-in sample images.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self {
                source: SeedSource::File(path.to_path_buf()),
                save_path: path.to_path_buf(),
            });
        }

        let data_file = data_file_path()?;
        let source = if data_file.exists() {
            SeedSource::File(data_file.clone())
        } else {
            SeedSource::Builtin
        };

        debug!(?source, save_path = %data_file.display(), "Resolved seed");

        Ok(Self {
            source,
            save_path: data_file,
        })
    }

    /// Build a gallery from the resolved seed.
    pub fn open(&self) -> Result<MemoryGallery> {
        MemoryGallery::from_seed(&self.source)
            .with_context(|| format!("Failed to load images from {}", self.describe()))
    }

    /// Human-readable seed origin.
    pub fn describe(&self) -> String {
        match &self.source {
            SeedSource::Builtin => "built-in sample images".to_string(),
            SeedSource::File(path) => path.display().to_string(),
        }
    }
}

/// Get the per-user data file path.
fn data_file_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "gallery").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join(DATA_FILE))
}
