use std::path::Path;

use bodywarp_image::{Image, ImageSize};

use crate::error::IoError;

/// Decodes an image of any supported format into an RGBA buffer.
///
/// The format is guessed from the content. Grayscale and RGB sources gain an
/// opaque alpha channel.
///
/// # Arguments
///
/// * `src` - Raw bytes of the encoded image.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] when the bytes are not a decodable image.
/// Callers rendering a preview are expected to fall back to the original
/// picture in that case.
pub fn decode_image_rgba8(src: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let decoded = image::load_from_memory(src)?.to_rgba8();
    let size = ImageSize {
        width: decoded.width() as usize,
        height: decoded.height() as usize,
    };
    log::debug!("decoded {} byte image to {}", src.len(), size);
    Ok(Image::new(size, decoded.into_raw())?)
}

/// Reads and decodes an image file into an RGBA buffer.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or cannot be decoded.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    decode_image_rgba8(&bytes)
}
