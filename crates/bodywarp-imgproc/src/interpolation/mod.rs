//! Pixel interpolation used when resampling images during warping.
//!
//! Sampling positions are pixel coordinates where integer values address pixel
//! origins. Positions outside the image are clamped to the nearest edge pixel
//! before interpolation, so every lookup reads a valid pixel.

mod bilinear;

pub use bilinear::{bilinear_interpolation, clamp_to_image, sample_bilinear_u8};
