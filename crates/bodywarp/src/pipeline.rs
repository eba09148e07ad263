use std::time::Instant;

use bodywarp_image::Rgba8;
use bodywarp_imgproc::{
    enhance::{color_grade, ColorGrade},
    resize::downscale_to_fit,
    warp::{warp_zones, WarpZone},
};
use bodywarp_io::{jpeg::encode_image_jpeg_rgba8, IoError};

use crate::config::PreviewConfig;
use crate::error::PreviewError;
use crate::overlay::{definition_overlays, OverlayDescriptor};
use crate::progress::Intensity;
use crate::view::View;
use crate::zones::{builtin_specs, zones_from_specs, ZoneSpec, ZoneTable};

/// The result of rendering a preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// The warped and graded image, same size as the downscaled source.
    pub image: Rgba8,
    /// Definition overlays to composite on top of `image`.
    pub overlays: Vec<OverlayDescriptor>,
    /// The zones the image was warped with.
    pub zones: Vec<WarpZone>,
    /// The intensity the preview was rendered at.
    pub intensity: Intensity,
}

impl Preview {
    /// Encode the preview image as JPEG.
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, PreviewError> {
        Ok(encode_image_jpeg_rgba8(&self.image, quality)?)
    }
}

/// Render a preview of `source` for a view with the built-in zone tables.
///
/// The source is downscaled to `config.max_dimension`, warped by the view's
/// zones, color graded, and paired with the view's definition overlays. At
/// zero intensity the image is returned unchanged and there are no overlays.
///
/// # Errors
///
/// Returns an error if the source cannot be resized or the warp pass cannot be
/// scheduled.
pub fn render_preview(
    source: &Rgba8,
    view: View,
    intensity: Intensity,
    config: &PreviewConfig,
) -> Result<Preview, PreviewError> {
    render_with_specs(source, view, intensity, config, builtin_specs(view))
}

/// Render a preview with a caller supplied zone table.
///
/// # Errors
///
/// Returns [`PreviewError::InvalidZoneTable`] if an entry of the table cannot
/// be evaluated, otherwise see [`render_preview`].
pub fn render_preview_with_table(
    source: &Rgba8,
    view: View,
    intensity: Intensity,
    config: &PreviewConfig,
    table: &ZoneTable,
) -> Result<Preview, PreviewError> {
    table.validate()?;
    render_with_specs(source, view, intensity, config, table.specs(view))
}

/// Decode `bytes` and render a preview of the result.
///
/// # Errors
///
/// A source that cannot be decoded yields [`PreviewError::Io`] wrapping
/// [`IoError::DecodeError`]; callers should show the original image instead.
pub fn render_preview_bytes(
    bytes: &[u8],
    view: View,
    intensity: Intensity,
    config: &PreviewConfig,
) -> Result<Preview, PreviewError> {
    let source = bodywarp_io::decode::decode_image_rgba8(bytes).map_err(|e| {
        if let IoError::DecodeError(ref cause) = e {
            log::warn!("cannot decode source image, keeping the original: {cause}");
        }
        e
    })?;
    render_preview(&source, view, intensity, config)
}

fn render_with_specs(
    source: &Rgba8,
    view: View,
    intensity: Intensity,
    config: &PreviewConfig,
    specs: &[ZoneSpec],
) -> Result<Preview, PreviewError> {
    let start = Instant::now();

    let source = downscale_to_fit(source, config.max_dimension)?;
    let size = source.size();
    log::debug!("rendering {view} preview at {size}, p = {}", intensity.value());

    let zones = zones_from_specs(specs, view, size, intensity);
    let overlays = definition_overlays(view, intensity);

    if intensity.is_zero() {
        return Ok(Preview {
            image: source,
            overlays,
            zones,
            intensity,
        });
    }

    let mut warped = Rgba8::from_size_val(size, 0u8)?;
    warp_zones(&source, &mut warped, &zones, config.strategy)?;
    log::debug!("warped with {} zones in {:?}", zones.len(), start.elapsed());

    let grade = ColorGrade::from_intensity(intensity.value());
    let mut graded = Rgba8::from_size_val(size, 0u8)?;
    color_grade(&warped, &mut graded, &grade)?;
    log::debug!("preview done in {:?}", start.elapsed());

    Ok(Preview {
        image: graded,
        overlays,
        zones,
        intensity,
    })
}
