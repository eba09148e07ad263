use bodywarp_image::{Image, ImageError};

use crate::parallel;

// Rec. 709 luma weights used by the saturation matrix.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// A composed contrast, brightness and saturation adjustment.
///
/// The adjustments are applied in that fixed order, each on the clamped output
/// of the previous one, over the color channels of an RGBA image. Alpha is
/// passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGrade {
    /// Contrast multiplier around mid gray, 1 is neutral.
    pub contrast: f32,
    /// Brightness multiplier, 1 is neutral.
    pub brightness: f32,
    /// Saturation multiplier, 1 is neutral and 0 is grayscale.
    pub saturation: f32,
}

impl Default for ColorGrade {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorGrade {
    /// The neutral grade.
    pub const IDENTITY: ColorGrade = ColorGrade {
        contrast: 1.0,
        brightness: 1.0,
        saturation: 1.0,
    };

    /// Grade scaled by the warp intensity `p` in [0, 1].
    ///
    /// Contrast grows by 18%, brightness by 4% and saturation by 12% at full
    /// intensity. `p = 0` gives [`ColorGrade::IDENTITY`].
    pub fn from_intensity(p: f32) -> Self {
        Self {
            contrast: 1.0 + 0.18 * p,
            brightness: 1.0 + 0.04 * p,
            saturation: 1.0 + 0.12 * p,
        }
    }

    /// Whether the grade leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Grade a single color given as normalized `[r, g, b]` in [0, 1].
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        let contrasted = rgb.map(|c| ((c - 0.5) * self.contrast + 0.5).clamp(0.0, 1.0));
        let brightened = contrasted.map(|c| (c * self.brightness).clamp(0.0, 1.0));
        saturate(brightened, self.saturation)
    }
}

fn saturate([r, g, b]: [f32; 3], s: f32) -> [f32; 3] {
    let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
    [r, g, b].map(|c| (luma + (c - luma) * s).clamp(0.0, 1.0))
}

/// Applies a [`ColorGrade`] to an 8-bit RGBA image.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output RGBA image, same size as `src`.
/// * `grade` - The adjustment to apply.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use bodywarp_image::{Image, ImageSize};
/// use bodywarp_imgproc::enhance::{color_grade, ColorGrade};
///
/// let src = Image::<u8, 4>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![10, 120, 240, 200],
/// ).unwrap();
/// let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0).unwrap();
///
/// color_grade(&src, &mut dst, &ColorGrade::IDENTITY).unwrap();
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn color_grade(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    grade: &ColorGrade,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    if grade.is_identity() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let rgb = [src_pixel[0], src_pixel[1], src_pixel[2]].map(|c| c as f32 / 255.0);
        let graded = grade.apply_rgb(rgb);
        for (d, c) in dst_pixel.iter_mut().zip(graded) {
            *d = (c * 255.0).round() as u8;
        }
        dst_pixel[3] = src_pixel[3];
    });

    Ok(())
}
