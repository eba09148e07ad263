//! Muscle definition overlays.
//!
//! Overlays are not rasterized into the warped image. They are handed to the
//! presentation layer as declarative gradient shapes, positioned in percent of
//! the image box, to be composited on top of the preview.

use serde::Serialize;

use crate::progress::Intensity;
use crate::view::View;

/// Intensity at which the definition overlays start to fade in.
pub const DEFINITION_ONSET: f32 = 0.25;

/// A color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    /// Position along the gradient in [0, 1].
    pub offset: f32,
    /// Straight RGB color.
    pub rgb: [u8; 3],
    /// Alpha of the stop in [0, 1].
    pub alpha: f32,
}

/// Geometry of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradientShape {
    /// A linear gradient along `angle_deg`, measured clockwise from "to top".
    Linear {
        /// Direction of the gradient line in degrees.
        angle_deg: f32,
    },
    /// An elliptical gradient filling the descriptor box from its center.
    Radial,
}

/// A translucent gradient to composite over the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayDescriptor {
    /// Anatomical region the overlay shades.
    pub region: &'static str,
    /// Gradient geometry.
    pub shape: GradientShape,
    /// Gradient color stops.
    pub stops: &'static [ColorStop],
    /// Left edge of the box in percent of the image width.
    pub left: f32,
    /// Top edge of the box in percent of the image height.
    pub top: f32,
    /// Box width in percent of the image width.
    pub width: f32,
    /// Box height in percent of the image height.
    pub height: f32,
    /// Layer opacity in [0, 1].
    pub opacity: f32,
}

const CREASE: [ColorStop; 3] = [
    ColorStop {
        offset: 0.0,
        rgb: [40, 26, 20],
        alpha: 0.0,
    },
    ColorStop {
        offset: 0.5,
        rgb: [40, 26, 20],
        alpha: 0.6,
    },
    ColorStop {
        offset: 1.0,
        rgb: [40, 26, 20],
        alpha: 0.0,
    },
];

const SHADOW: [ColorStop; 2] = [
    ColorStop {
        offset: 0.0,
        rgb: [46, 30, 24],
        alpha: 0.5,
    },
    ColorStop {
        offset: 1.0,
        rgb: [46, 30, 24],
        alpha: 0.0,
    },
];

const HIGHLIGHT: [ColorStop; 2] = [
    ColorStop {
        offset: 0.0,
        rgb: [255, 240, 228],
        alpha: 0.35,
    },
    ColorStop {
        offset: 1.0,
        rgb: [255, 240, 228],
        alpha: 0.0,
    },
];

const fn linear(
    region: &'static str,
    stops: &'static [ColorStop],
    angle_deg: f32,
    [left, top, width, height]: [f32; 4],
    opacity: f32,
) -> OverlayDescriptor {
    OverlayDescriptor {
        region,
        shape: GradientShape::Linear { angle_deg },
        stops,
        left,
        top,
        width,
        height,
        opacity,
    }
}

const fn radial(
    region: &'static str,
    stops: &'static [ColorStop],
    [left, top, width, height]: [f32; 4],
    opacity: f32,
) -> OverlayDescriptor {
    OverlayDescriptor {
        region,
        shape: GradientShape::Radial,
        stops,
        left,
        top,
        width,
        height,
        opacity,
    }
}

// opacities are the values at full definition
static FRONT: [OverlayDescriptor; 10] = [
    linear("linea_alba", &CREASE, 90.0, [49.0, 40.0, 2.0, 22.0], 0.35),
    radial("abs_upper", &SHADOW, [44.0, 42.0, 12.0, 5.0], 0.22),
    radial("abs_middle", &SHADOW, [44.0, 48.0, 12.0, 5.0], 0.20),
    radial("abs_lower", &SHADOW, [44.0, 54.0, 12.0, 5.0], 0.18),
    linear("oblique_left", &CREASE, 70.0, [38.0, 50.0, 6.0, 14.0], 0.25),
    linear("oblique_right", &CREASE, 110.0, [56.0, 50.0, 6.0, 14.0], 0.25),
    linear("pectoral_line", &CREASE, 180.0, [38.0, 34.0, 24.0, 3.0], 0.20),
    radial("deltoid_left", &HIGHLIGHT, [27.0, 25.0, 7.0, 8.0], 0.15),
    radial("deltoid_right", &HIGHLIGHT, [66.0, 25.0, 7.0, 8.0], 0.15),
    radial("chest_highlight", &HIGHLIGHT, [40.0, 28.0, 20.0, 6.0], 0.12),
];

static BACK: [OverlayDescriptor; 6] = [
    linear("spine_channel", &CREASE, 90.0, [49.0, 30.0, 2.0, 32.0], 0.30),
    linear("lat_left", &CREASE, 60.0, [33.0, 34.0, 9.0, 16.0], 0.22),
    linear("lat_right", &CREASE, 120.0, [58.0, 34.0, 9.0, 16.0], 0.22),
    radial("scapula_left", &SHADOW, [38.0, 27.0, 9.0, 8.0], 0.18),
    radial("scapula_right", &SHADOW, [53.0, 27.0, 9.0, 8.0], 0.18),
    radial("lower_back", &SHADOW, [42.0, 55.0, 16.0, 8.0], 0.15),
];

/// Definition overlays for a view at an intensity.
///
/// The opacity of every overlay is scaled by the definition ramp
/// `max(0, (p - 0.25) / 0.75)`. Profile views never get overlays, and the list
/// is empty while the ramp is zero.
///
/// # Example
///
/// ```
/// use bodywarp::{definition_overlays, Intensity, View};
///
/// assert!(definition_overlays(View::Side, Intensity::FULL).is_empty());
/// assert!(definition_overlays(View::Front, Intensity::from_fraction(0.2)).is_empty());
/// assert!(!definition_overlays(View::Back, Intensity::FULL).is_empty());
/// ```
pub fn definition_overlays(view: View, intensity: Intensity) -> Vec<OverlayDescriptor> {
    let definition = intensity.ramp(DEFINITION_ONSET);
    if definition <= 0.0 {
        return Vec::new();
    }

    let table: &[OverlayDescriptor] = match view {
        View::Front => &FRONT,
        View::Back => &BACK,
        View::Side | View::SideAlt => &[],
    };

    table
        .iter()
        .map(|overlay| OverlayDescriptor {
            opacity: overlay.opacity * definition,
            ..*overlay
        })
        .collect()
}
