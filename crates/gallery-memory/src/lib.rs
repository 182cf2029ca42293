//! gallery-memory - In-process image store.

mod gallery;
mod seed;
mod store;

pub use gallery::MemoryGallery;
pub use seed::{SeedSource, builtin_images, load_images, save_images};
pub use store::CollectionStore;
