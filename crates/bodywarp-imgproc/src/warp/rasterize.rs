use bodywarp_image::{Image, ImageError};
use thiserror::Error;

use super::field::displacement_at;
use super::zone::WarpZone;
use crate::interpolation::{clamp_to_image, sample_bilinear_u8};
use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Errors raised by the warp rasterizer.
#[derive(Error, Debug, PartialEq)]
pub enum WarpError {
    /// The source and destination images are not the same size.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The pass could not be scheduled.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Warps an image by the displacement field of a set of zones.
///
/// For every destination pixel the summed zone displacement `(dx, dy)` is
/// evaluated at the pixel's normalized position. Undisplaced pixels are copied
/// from the source unchanged; displaced pixels pull the bilinear sample at
/// `(x + dx, y + dy)`, clamped to the image bounds.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, C).
/// * `dst` - The output image, same size as `src`.
/// * `zones` - The deformation zones.
/// * `strategy` - How the rows of `dst` are scheduled.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size, or the execution
/// strategy is invalid. Nothing is written to `dst` in that case.
pub fn warp_zones<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    zones: &[WarpZone],
    strategy: ExecutionStrategy,
) -> Result<(), WarpError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    if zones.is_empty() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let (cols, rows) = (src.cols(), src.rows());
    let (width, height) = (cols as f32, rows as f32);
    let src_data = src.as_slice();

    parallel::par_iter_rows_indexed(dst, strategy, |x, y, dst_pixel| {
        let (dx, dy) = displacement_at(zones, x as f32 / width, y as f32 / height);

        if dx == 0.0 && dy == 0.0 {
            let base = (y * cols + x) * C;
            dst_pixel.copy_from_slice(&src_data[base..base + C]);
            return;
        }

        let (u, v) = clamp_to_image(x as f32 + dx, y as f32 + dy, cols, rows);
        dst_pixel.copy_from_slice(&sample_bilinear_u8(src, u, v));
    })?;

    Ok(())
}
