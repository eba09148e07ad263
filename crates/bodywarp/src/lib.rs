#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The crate renders a preview of a photograph in which only a fixed set of
//! hand-authored elliptical body regions are displaced, leaving everything else
//! pixel-identical. A single intensity value in [0, 1] drives the warp, the
//! color grade and the definition overlays.
//!
//! ```
//! use bodywarp::{render_preview, Intensity, PreviewConfig, View};
//! use bodywarp::image::{Image, ImageSize};
//!
//! let photo = Image::<u8, 4>::from_size_val(ImageSize { width: 40, height: 60 }, 128).unwrap();
//! let preview = render_preview(&photo, View::Front, Intensity::from_fraction(0.0), &PreviewConfig::default()).unwrap();
//!
//! assert_eq!(preview.image, photo);
//! assert!(preview.overlays.is_empty());
//! ```

/// preview configuration.
pub mod config;

/// Error types for the preview pipeline.
pub mod error;

/// definition overlay descriptors.
pub mod overlay;

/// the end to end preview pipeline.
pub mod pipeline;

/// mapping of progress to warp intensity.
pub mod progress;

/// camera views.
pub mod view;

/// warp zone tables and generation.
pub mod zones;

#[doc(inline)]
pub use bodywarp_image as image;

#[doc(inline)]
pub use bodywarp_imgproc as imgproc;

#[doc(inline)]
pub use bodywarp_io as io;

pub use crate::config::PreviewConfig;
pub use crate::error::PreviewError;
pub use crate::overlay::{definition_overlays, OverlayDescriptor};
pub use crate::pipeline::{
    render_preview, render_preview_bytes, render_preview_with_table, Preview,
};
pub use crate::progress::{Intensity, IntensitySource};
pub use crate::view::View;
pub use crate::zones::{warp_zones_for, ZoneTable};
