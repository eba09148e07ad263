use bodywarp_image::{ImageError, ImageSize, Rgba8};
use fast_image_resize as fr;

/// Computes the size of an image downscaled to fit a maximum dimension.
///
/// The aspect ratio is preserved, images already within the bound are left
/// untouched and each side is at least one pixel. A `max_dimension` of zero
/// disables the bound.
///
/// # Example
///
/// ```
/// use bodywarp_image::ImageSize;
/// use bodywarp_imgproc::resize::fit_within;
///
/// let size = fit_within(ImageSize { width: 1600, height: 1200 }, 800);
/// assert_eq!(size, ImageSize { width: 800, height: 600 });
/// ```
pub fn fit_within(size: ImageSize, max_dimension: usize) -> ImageSize {
    let longest = size.width.max(size.height);
    if max_dimension == 0 || longest <= max_dimension {
        return size;
    }

    let scale = max_dimension as f64 / longest as f64;
    let scaled = |side: usize| ((side as f64 * scale).round() as usize).clamp(1, max_dimension);

    ImageSize {
        width: scaled(size.width),
        height: scaled(size.height),
    }
}

/// Resize an RGBA image using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// Bilinear convolution is used; the color channels are premultiplied by alpha
/// during filtering so transparent pixels do not bleed into their neighbours.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output RGBA image, already allocated with the target size.
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
pub fn resize_fast_rgba(src: &Rgba8, dst: &mut Rgba8) -> Result<(), ImageError> {
    let src_len = src.as_slice().len();
    let [src_width, src_height]: [u32; 2] = src.size().into();
    let src_image = fr::images::ImageRef::new(
        src_width,
        src_height,
        src.as_slice(),
        fr::PixelType::U8x4,
    )
    .map_err(|_| ImageError::InvalidChannelShape(src_len, src.width() * src.height() * 4))?;

    let [dst_width, dst_height]: [u32; 2] = dst.size().into();
    let dst_len = dst.as_slice().len();
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x4,
    )
    .map_err(|_| ImageError::InvalidChannelShape(dst_len, dst_len))?;

    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Bilinear));

    fr::Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|_| ImageError::IncompatiblePixelTypes)?;

    Ok(())
}

/// Downscales an RGBA image so its longest side does not exceed `max_dimension`.
///
/// Returns a copy of the input when it already fits.
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
pub fn downscale_to_fit(
    src: &Rgba8,
    max_dimension: usize,
) -> Result<Rgba8, ImageError> {
    let new_size = fit_within(src.size(), max_dimension);
    if new_size == src.size() {
        return Ok(src.clone());
    }

    let mut dst = Rgba8::from_size_val(new_size, 0u8)?;
    resize_fast_rgba(src, &mut dst)?;
    Ok(dst)
}
