//! Gallery trait.

use async_trait::async_trait;

use crate::Result;
use crate::ops::{LikeImageInput, LikeImagePayload, ListImagesInput};
use crate::query::ImageConnection;

/// A queryable image collection.
///
/// Transports (a JSON-lines server, a CLI, a graph resolver) receive
/// already-validated arguments and forward them here.
#[async_trait]
pub trait Gallery: Send + Sync {
    /// List one page of images matching the input's filter.
    ///
    /// Never fails for well-typed input. An `after` cursor that does not
    /// resolve within the filtered sequence restarts from the first image.
    async fn list_images(&self, input: &ListImagesInput) -> Result<ImageConnection>;

    /// Flip the `liked` flag of one image and move its count accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when no image has
    /// the requested id. The store is left untouched in that case.
    async fn like_image(&self, input: LikeImageInput) -> Result<LikeImagePayload>;
}
