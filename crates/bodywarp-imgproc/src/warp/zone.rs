use serde::{Deserialize, Serialize};

/// An elliptical deformation region.
///
/// Center and radii are normalized to the image size (0..1), the displacement
/// is in absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarpZone {
    /// Normalized x coordinate of the ellipse center.
    pub cx: f32,
    /// Normalized y coordinate of the ellipse center.
    pub cy: f32,
    /// Normalized horizontal radius.
    pub rx: f32,
    /// Normalized vertical radius.
    pub ry: f32,
    /// Horizontal displacement in pixels at the zone center.
    pub dx: f32,
    /// Vertical displacement in pixels at the zone center.
    pub dy: f32,
}

impl WarpZone {
    /// Create a new zone.
    pub const fn new(cx: f32, cy: f32, rx: f32, ry: f32, dx: f32, dy: f32) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            dx,
            dy,
        }
    }

    /// Normalized squared ellipse distance of the point `(nx, ny)` from the center.
    #[inline]
    pub fn distance_sq(&self, nx: f32, ny: f32) -> f32 {
        let ex = (nx - self.cx) / self.rx;
        let ey = (ny - self.cy) / self.ry;
        ex * ex + ey * ey
    }

    /// Weighted displacement of this zone at `(nx, ny)`, zero outside the ellipse.
    #[inline]
    pub fn displacement(&self, nx: f32, ny: f32) -> (f32, f32) {
        let w = falloff(self.distance_sq(nx, ny));
        (self.dx * w, self.dy * w)
    }
}

/// Smooth radial falloff `(1 - d²)²`.
///
/// Returns 1 at the center, decreasing monotonically to exactly 0 for `d² >= 1`.
#[inline]
pub fn falloff(d2: f32) -> f32 {
    if d2 >= 1.0 {
        return 0.0;
    }
    let t = 1.0 - d2;
    t * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn falloff_profile() {
        assert_eq!(falloff(0.0), 1.0);
        assert_relative_eq!(falloff(0.5), 0.25);
        assert_eq!(falloff(1.0), 0.0);
        assert_eq!(falloff(3.0), 0.0);
    }

    #[test]
    fn falloff_non_increasing() {
        let mut prev = falloff(0.0);
        for i in 1..=200 {
            let cur = falloff(i as f32 / 100.0);
            assert!(cur <= prev);
            prev = cur;
        }
    }

    #[test]
    fn zone_displacement() {
        let zone = WarpZone::new(0.5, 0.5, 0.25, 0.125, 4.0, -2.0);
        assert_eq!(zone.displacement(0.5, 0.5), (4.0, -2.0));
        // on the boundary along both axes
        assert_eq!(zone.displacement(0.75, 0.5), (0.0, 0.0));
        assert_eq!(zone.displacement(0.5, 0.375), (0.0, 0.0));
        assert_eq!(zone.displacement(0.9, 0.9), (0.0, 0.0));
        let (dx, dy) = zone.displacement(0.625, 0.5);
        assert_relative_eq!(dx, 4.0 * 0.5625, epsilon = 1e-5);
        assert_relative_eq!(dy, -2.0 * 0.5625, epsilon = 1e-5);
    }
}
