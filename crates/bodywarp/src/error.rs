use bodywarp_image::ImageError;
use bodywarp_imgproc::warp::WarpError;
use bodywarp_io::IoError;

/// An error type for the preview pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    /// Error when manipulating a pixel buffer.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when warping the pixel buffer.
    #[error(transparent)]
    Warp(#[from] WarpError),

    /// Error when decoding the source or encoding the result.
    ///
    /// A failed decode surfaces as [`IoError::DecodeError`]; the caller should
    /// then show the original, unwarped image.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error when parsing a configuration or zone table document.
    #[error("Failed to parse configuration. {0}")]
    ConfigError(#[from] serde_json::Error),

    /// A zone table entry cannot be evaluated.
    #[error("Invalid zone table entry {index} for {layout}: {reason}")]
    InvalidZoneTable {
        /// The layout containing the entry.
        layout: &'static str,
        /// The position of the entry in its layout.
        index: usize,
        /// Why the entry was rejected.
        reason: &'static str,
    },
}
