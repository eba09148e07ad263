use std::path::Path;

use bodywarp_image::Image;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::IoError;

/// Encodes an RGBA image to JPEG bytes; the alpha channel is dropped.
///
/// # Arguments
///
/// * `image` - The RGBA image to encode.
/// * `quality` - The quality of the JPEG encoding, range from 1 (lowest) to 100 (highest)
pub fn encode_image_jpeg_rgba8(image: &Image<u8, 4>, quality: u8) -> Result<Vec<u8>, IoError> {
    let (width, height) = dimensions_u16(image)?;
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality.clamp(1, 100));
    encoder.encode(image.as_slice(), width, height, ColorType::Rgba)?;
    Ok(buf)
}

/// Writes the given RGBA image as JPEG to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `image` - The RGBA image to encode.
/// - `quality` - The quality of the JPEG encoding, range from 1 (lowest) to 100 (highest)
pub fn write_image_jpeg_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
    quality: u8,
) -> Result<(), IoError> {
    let jpeg_data = encode_image_jpeg_rgba8(image, quality)?;
    std::fs::write(file_path, jpeg_data)?;
    Ok(())
}

fn dimensions_u16(image: &Image<u8, 4>) -> Result<(u16, u16), IoError> {
    let width = u16::try_from(image.width());
    let height = u16::try_from(image.height());
    match (width, height) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(IoError::ImageTooLarge(image.width(), image.height())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_image_rgba8, read_image_rgba8};
    use bodywarp_image::ImageSize;

    #[test]
    fn encode_decode_jpeg() -> Result<(), IoError> {
        let size = ImageSize {
            width: 16,
            height: 9,
        };
        let image = Image::<u8, 4>::from_size_val(size, 180)?;
        let bytes = encode_image_jpeg_rgba8(&image, 90)?;
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = decode_image_rgba8(&bytes)?;
        assert_eq!(decoded.size(), size);
        assert_eq!(decoded.pixel(0, 0)?[3], 255);
        Ok(())
    }

    #[test]
    fn write_jpeg_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("preview.jpg");

        let image = Image::<u8, 4>::from_size_val([5, 4].into(), 64)?;
        write_image_jpeg_rgba8(&file_path, &image, 85)?;

        let read = read_image_rgba8(&file_path)?;
        assert_eq!(read.size(), image.size());
        Ok(())
    }
}
