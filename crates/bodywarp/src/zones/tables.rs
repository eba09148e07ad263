//! Built-in zone tables, one per layout.
//!
//! Centers and radii are normalized to the image, displacements are fractions
//! of the image width (`dx`) or height (`dy`) at full intensity. With the pull
//! sampling used by the rasterizer a negative `dx` on the left half of the body
//! moves its contour inward, a positive one outward. The profile table is
//! authored facing right.

use super::{Onset, ZoneSpec};

const fn primary(cx: f32, cy: f32, rx: f32, ry: f32, dx: f32, dy: f32) -> ZoneSpec {
    ZoneSpec {
        cx,
        cy,
        rx,
        ry,
        dx,
        dy,
        onset: Onset::Primary,
        mirror: false,
    }
}

const fn delayed(cx: f32, cy: f32, rx: f32, ry: f32, dx: f32, dy: f32) -> ZoneSpec {
    ZoneSpec {
        onset: Onset::Delayed,
        ..primary(cx, cy, rx, ry, dx, dy)
    }
}

const fn mirrored(spec: ZoneSpec) -> ZoneSpec {
    ZoneSpec {
        mirror: true,
        ..spec
    }
}

pub(crate) static FRONT: [ZoneSpec; 19] = [
    // waist
    primary(0.38, 0.50, 0.10, 0.09, -0.035, 0.0),
    primary(0.62, 0.50, 0.10, 0.09, 0.035, 0.0),
    // lower belly
    primary(0.50, 0.56, 0.12, 0.07, 0.0, -0.012),
    // flanks
    primary(0.36, 0.58, 0.08, 0.07, -0.025, 0.0),
    primary(0.64, 0.58, 0.08, 0.07, 0.025, 0.0),
    // hips
    primary(0.35, 0.66, 0.09, 0.08, -0.020, 0.0),
    primary(0.65, 0.66, 0.09, 0.08, 0.020, 0.0),
    // upper arms
    primary(0.25, 0.38, 0.06, 0.10, -0.015, 0.0),
    primary(0.75, 0.38, 0.06, 0.10, 0.015, 0.0),
    // forearms
    primary(0.21, 0.52, 0.05, 0.09, -0.008, 0.0),
    primary(0.79, 0.52, 0.05, 0.09, 0.008, 0.0),
    // inner thighs
    primary(0.42, 0.78, 0.08, 0.10, -0.012, 0.0),
    primary(0.58, 0.78, 0.08, 0.10, 0.012, 0.0),
    // shoulders
    delayed(0.30, 0.26, 0.08, 0.06, 0.020, 0.0),
    delayed(0.70, 0.26, 0.08, 0.06, -0.020, 0.0),
    // upper chest
    delayed(0.50, 0.32, 0.14, 0.06, 0.0, 0.008),
    // jaw
    delayed(0.46, 0.16, 0.035, 0.03, -0.006, 0.0),
    delayed(0.54, 0.16, 0.035, 0.03, 0.006, 0.0),
    // chin
    delayed(0.50, 0.19, 0.04, 0.03, 0.0, -0.004),
];

pub(crate) static BACK: [ZoneSpec; 10] = [
    // waist
    primary(0.38, 0.52, 0.10, 0.09, -0.030, 0.0),
    primary(0.62, 0.52, 0.10, 0.09, 0.030, 0.0),
    // hips
    primary(0.36, 0.66, 0.09, 0.08, -0.018, 0.0),
    primary(0.64, 0.66, 0.09, 0.08, 0.018, 0.0),
    // upper arms
    primary(0.25, 0.38, 0.06, 0.10, -0.012, 0.0),
    primary(0.75, 0.38, 0.06, 0.10, 0.012, 0.0),
    // lats
    delayed(0.33, 0.36, 0.07, 0.09, 0.018, 0.0),
    delayed(0.67, 0.36, 0.07, 0.09, -0.018, 0.0),
    // shoulders
    delayed(0.30, 0.26, 0.08, 0.06, 0.015, 0.0),
    delayed(0.70, 0.26, 0.08, 0.06, -0.015, 0.0),
];

pub(crate) static PROFILE: [ZoneSpec; 10] = [
    // belly
    mirrored(primary(0.56, 0.52, 0.09, 0.09, 0.040, 0.0)),
    mirrored(primary(0.55, 0.60, 0.08, 0.06, 0.025, 0.0)),
    // lower back
    mirrored(primary(0.42, 0.55, 0.07, 0.08, -0.012, 0.0)),
    // glutes
    mirrored(primary(0.41, 0.66, 0.08, 0.08, -0.010, 0.010)),
    // upper arm and thigh sit on the body axis
    primary(0.50, 0.38, 0.05, 0.10, 0.008, 0.0),
    primary(0.50, 0.78, 0.07, 0.10, 0.006, 0.0),
    // chest
    mirrored(delayed(0.56, 0.33, 0.07, 0.06, -0.012, 0.006)),
    // upper back
    mirrored(delayed(0.44, 0.28, 0.06, 0.06, 0.008, 0.0)),
    // jaw and neck
    mirrored(delayed(0.55, 0.15, 0.04, 0.03, 0.006, -0.004)),
    mirrored(delayed(0.52, 0.20, 0.03, 0.03, 0.004, 0.0)),
];
