//! Connection-style listing: filtering, cursors and pagination.
//!
//! A list request flows through three stages. [`ImageFilter`] narrows the
//! collection into the filtered sequence, [`Cursor`] locates the resume
//! position within it, and [`paginate`] slices the page and derives its
//! [`PageInfo`].

mod connection;
mod cursor;
mod filter;
mod pagination;

pub use connection::{Edge, ImageConnection, PageInfo};
pub use cursor::Cursor;
pub use filter::ImageFilter;
pub use pagination::paginate;
