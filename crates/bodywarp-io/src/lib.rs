#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// Decoding of compressed images into RGBA pixel buffers.
///
/// See [`decode::decode_image_rgba8`] for automatic format detection.
pub mod decode;

/// JPEG encoding of RGBA pixel buffers.
pub mod jpeg;

pub use crate::error::IoError;
