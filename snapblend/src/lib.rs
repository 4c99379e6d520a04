//! Core client crate for the Snapblend SDK.

pub mod classify;
pub mod client;
pub mod error;
pub mod generations;
pub mod media;
pub mod prompt;
pub mod scenes;

#[cfg(test)]
mod test_support;

pub use snapblend_types as types;

pub use client::{Client, ClientBuilder, Credentials, HttpOptions};
pub use error::{Error, ErrorKind, Result};
pub use media::{prepare_image, prepare_image_from_path, PreparedUpload};
