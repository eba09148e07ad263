/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the source image.
    #[error("Failed to decode the image. {0}")]
    DecodeError(#[from] image::ImageError),

    /// Error to encode the JPEG image.
    #[error("Error with Jpeg encoding. {0}")]
    EncodeError(#[from] jpeg_encoder::EncodingError),

    /// The image is too large for the target format.
    #[error("Image of {0}x{1} pixels exceeds the encoder limit")]
    ImageTooLarge(usize, usize),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] bodywarp_image::ImageError),
}
