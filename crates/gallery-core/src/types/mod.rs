//! Core gallery types.
//!
//! Identities enforce their invariants at construction time, so an
//! [`Image`] can never carry an empty or malformed id.

mod image;
mod image_id;

pub use image::Image;
pub use image_id::ImageId;
