use bodywarp_image::Image;

/// Clamps a sampling position component-wise to `[0, cols - 1] x [0, rows - 1]`.
///
/// # Arguments
///
/// * `u` - The x coordinate of the sampling position.
/// * `v` - The y coordinate of the sampling position.
/// * `cols` - The number of columns of the sampled image.
/// * `rows` - The number of rows of the sampled image.
///
/// # Returns
///
/// The clamped `(u, v)` position.
pub fn clamp_to_image(u: f32, v: f32, cols: usize, rows: usize) -> (f32, f32) {
    let max_u = cols.saturating_sub(1) as f32;
    let max_v = rows.saturating_sub(1) as f32;
    (u.clamp(0.0, max_u), v.clamp(0.0, max_v))
}

/// Kernel for bilinear interpolation
///
/// The position is clamped to the image before the four surrounding pixels are
/// fetched, and every channel is interpolated independently.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub fn bilinear_interpolation<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());
    let (u, v) = clamp_to_image(u, v, cols, rows);

    let iu0 = (u.floor() as usize).min(cols - 1);
    let iv0 = (v.floor() as usize).min(rows - 1);
    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let frac_u = u - iu0 as f32;
    let frac_v = v - iv0 as f32;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    let p00 = &data[base00..base00 + C];
    let p01 = &data[base01..base01 + C];
    let p10 = &data[base10..base10 + C];
    let p11 = &data[base11..base11 + C];

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = p00[k] as f32 * w00
            + p01[k] as f32 * w01
            + p10[k] as f32 * w10
            + p11[k] as f32 * w11;
    }

    pixel
}

/// Bilinear sample rounded back to 8-bit channels.
pub fn sample_bilinear_u8<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> [u8; C] {
    bilinear_interpolation(image, u, v).map(|x| x.round().clamp(0.0, 255.0) as u8)
}
