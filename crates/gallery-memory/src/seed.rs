//! Seed loading and saving.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument};

use gallery_core::Result;
use gallery_core::error::{Error, StorageError};
use gallery_core::types::{Image, ImageId};

fn map_io(path: &Path, err: std::io::Error) -> Error {
    Error::Storage(StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Where the initial collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The two sample images shipped with the crate.
    Builtin,
    /// A JSON array of images on disk.
    File(PathBuf),
}

impl SeedSource {
    /// Load the images this source describes.
    pub fn load(&self) -> Result<Vec<Image>> {
        match self {
            SeedSource::Builtin => builtin_images(),
            SeedSource::File(path) => load_images(path),
        }
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The sample collection, timestamped with the current time.
pub fn builtin_images() -> Result<Vec<Image>> {
    let now = now_iso8601();

    let samples = [
        ("1", "John Doe", false, 10, 100, "Beautiful Sunset"),
        ("2", "Jane Smith", true, 25, 150, "Mountain View"),
    ];

    samples
        .into_iter()
        .map(|(id, author, liked, likes_count, price, title)| {
            let mut image = Image::new(ImageId::new(id)?)
                .with_title(title)
                .with_likes(liked, likes_count);
            image.author = Some(author.to_string());
            image.created_at = Some(now.clone());
            image.updated_at = Some(now.clone());
            image.picture = Some(format!("https://example.com/image{}.jpg", id));
            image.price = Some(price);
            Ok::<_, Error>(image)
        })
        .collect()
}

/// Read a JSON array of images.
#[instrument]
pub fn load_images(path: &Path) -> Result<Vec<Image>> {
    let content = fs::read_to_string(path).map_err(|e| map_io(path, e))?;
    let images: Vec<Image> = serde_json::from_str(&content)?;

    debug!(count = images.len(), "Loaded seed images");

    Ok(images)
}

/// Write images as a JSON array, replacing the file atomically.
#[instrument(skip(images), fields(count = images.len()))]
pub fn save_images(path: &Path, images: &[Image]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| map_io(parent, e))?;
    }

    let content = serde_json::to_string_pretty(images)?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &content).map_err(|e| map_io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| map_io(path, e))?;

    debug!("Saved seed images");

    Ok(())
}
