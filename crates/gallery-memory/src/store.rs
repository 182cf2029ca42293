//! Ordered in-memory storage for images.

use std::collections::HashMap;

use tracing::{debug, instrument};

use gallery_core::Result;
use gallery_core::error::{InvalidInputError, NotFoundError};
use gallery_core::types::{Image, ImageId};

/// The ordered collection of images.
///
/// Presentation order is insertion order. Lookups go through an identity
/// index, never through array position.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    images: Vec<Image>,
    index: HashMap<ImageId, usize>,
}

impl CollectionStore {
    /// Build a store from seed images, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::DuplicateId`] if two images share an id.
    pub fn new(images: Vec<Image>) -> Result<Self> {
        let mut index = HashMap::with_capacity(images.len());

        for (pos, image) in images.iter().enumerate() {
            if index.insert(image.id.clone(), pos).is_some() {
                return Err(InvalidInputError::DuplicateId {
                    id: image.id.to_string(),
                }
                .into());
            }
        }

        debug!(count = images.len(), "Initialized image store");

        Ok(Self { images, index })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All images in presentation order.
    pub fn all(&self) -> &[Image] {
        &self.images
    }

    /// Look up an image by identity.
    pub fn find_by_id(&self, id: &ImageId) -> Result<&Image> {
        self.index
            .get(id)
            .map(|&pos| &self.images[pos])
            .ok_or_else(|| not_found(id))
    }

    /// Apply `mutator` to exactly one image in place.
    ///
    /// The identity is immutable: it is restored after the mutator runs.
    /// Fails without touching anything if no image has `id`.
    #[instrument(skip(self, mutator))]
    pub fn update<F, T>(&mut self, id: &ImageId, mutator: F) -> Result<T>
    where
        F: FnOnce(&mut Image) -> T,
    {
        let pos = *self.index.get(id).ok_or_else(|| not_found(id))?;
        let image = &mut self.images[pos];

        let out = mutator(&mut *image);
        image.id = id.clone();

        Ok(out)
    }
}

fn not_found(id: &ImageId) -> gallery_core::Error {
    NotFoundError::Image { id: id.to_string() }.into()
}
