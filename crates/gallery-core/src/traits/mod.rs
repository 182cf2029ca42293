//! Core traits for gallery backends.

mod gallery;

pub use gallery::Gallery;
