//! gallery-core - Core types and the connection pagination engine.
//!
//! # Example
//!
//! ```
//! use gallery_core::{Image, ImageFilter, ImageId, paginate};
//!
//! let images = vec![
//!     Image::new(ImageId::new("1").unwrap()).with_title("Beautiful Sunset"),
//!     Image::new(ImageId::new("2").unwrap()).with_title("Mountain View"),
//! ];
//!
//! let view = ImageFilter::title_contains("MOUNTAIN").apply(&images);
//! let page = paginate(&view, None, None);
//!
//! assert_eq!(page.nodes[0].id.as_str(), "2");
//! assert!(!page.page_info.has_next_page);
//! ```

pub mod error;
pub mod ops;
pub mod query;
pub mod traits;
pub mod types;

pub use error::Error;
pub use ops::{LikeImageInput, LikeImagePayload, ListImagesInput};
pub use query::{Cursor, Edge, ImageConnection, ImageFilter, PageInfo, paginate};
pub use traits::Gallery;
pub use types::{Image, ImageId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
