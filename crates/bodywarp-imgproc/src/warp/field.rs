use super::zone::WarpZone;
use crate::interpolation::clamp_to_image;

/// Sums the displacement of all zones at the normalized position `(nx, ny)`.
///
/// Zones whose ellipse does not contain the point contribute nothing. The
/// contributions of overlapping zones are added without normalization.
///
/// # Arguments
///
/// * `zones` - The deformation zones.
/// * `nx` - The x coordinate normalized by the image width.
/// * `ny` - The y coordinate normalized by the image height.
///
/// # Returns
///
/// The total `(dx, dy)` displacement in pixels.
pub fn displacement_at(zones: &[WarpZone], nx: f32, ny: f32) -> (f32, f32) {
    zones.iter().fold((0.0, 0.0), |(total_dx, total_dy), zone| {
        let (dx, dy) = zone.displacement(nx, ny);
        (total_dx + dx, total_dy + dy)
    })
}

/// Source position read by the destination pixel at column `x`, row `y`.
///
/// The pixel is displaced by the summed field and the result clamped to
/// `[0, cols - 1] x [0, rows - 1]`.
pub fn sample_coordinate(
    zones: &[WarpZone],
    x: usize,
    y: usize,
    cols: usize,
    rows: usize,
) -> (f32, f32) {
    let (dx, dy) = displacement_at(zones, x as f32 / cols as f32, y as f32 / rows as f32);
    clamp_to_image(x as f32 + dx, y as f32 + dy, cols, rows)
}
