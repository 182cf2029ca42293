//! Store-backed gallery implementation.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use gallery_core::Result;
use gallery_core::ops::{LikeImageInput, LikeImagePayload, ListImagesInput};
use gallery_core::query::{ImageConnection, paginate};
use gallery_core::traits::Gallery;
use gallery_core::types::{Image, ImageId};

use crate::seed::{SeedSource, save_images};
use crate::store::CollectionStore;

/// A [`Gallery`] over one in-process [`CollectionStore`].
///
/// Clones share the same store. Every read-modify-write of an image runs
/// under the store's write lock, but list requests see whatever state the
/// store is in at the time: cursors are not tied to a snapshot.
#[derive(Debug, Clone)]
pub struct MemoryGallery {
    store: Arc<RwLock<CollectionStore>>,
}

impl MemoryGallery {
    /// Wrap an existing store.
    pub fn new(store: CollectionStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Build a gallery from a seed source.
    pub fn from_seed(source: &SeedSource) -> Result<Self> {
        let images = source.load()?;
        Ok(Self::new(CollectionStore::new(images)?))
    }

    /// Fetch a copy of one image.
    pub async fn image(&self, id: &ImageId) -> Result<Image> {
        let store = self.store.read().await;
        store.find_by_id(id).cloned()
    }

    /// Copy of the whole collection in presentation order.
    pub async fn snapshot(&self) -> Vec<Image> {
        self.store.read().await.all().to_vec()
    }

    /// Write the current collection to a seed file.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let store = self.store.read().await;
        save_images(path, store.all())
    }
}

#[async_trait]
impl Gallery for MemoryGallery {
    #[instrument(skip(self))]
    async fn list_images(&self, input: &ListImagesInput) -> Result<ImageConnection> {
        let store = self.store.read().await;

        let view = input.filter().apply(store.all());
        let page = paginate(&view, input.after.as_ref(), input.limit);

        debug!(matched = view.len(), returned = page.len(), "Listed images");

        Ok(page)
    }

    #[instrument(skip(self), fields(id = %input.image_id))]
    async fn like_image(&self, input: LikeImageInput) -> Result<LikeImagePayload> {
        let mut store = self.store.write().await;

        let image = store.update(&input.image_id, |image| {
            image.toggle_like();
            image.clone()
        })?;

        debug!(liked = image.liked, likes_count = image.likes_count, "Toggled like");

        Ok(LikeImagePayload {
            client_mutation_id: input.client_mutation_id,
            image,
        })
    }
}
