//! Warp zone generation.
//!
//! Every layout has a fixed table of [`ZoneSpec`] entries. Generating the zones
//! for a view scales the table by the image size and the intensity: primary
//! regions (waist, hips, arms) follow `p` directly, delayed regions (shoulders,
//! upper chest, face) stay still until `p` passes 0.2 and then ramp up to their
//! full displacement at `p = 1`.

mod tables;

use bodywarp_image::ImageSize;
use bodywarp_imgproc::warp::WarpZone;
use serde::{Deserialize, Serialize};

use crate::error::PreviewError;
use crate::progress::Intensity;
use crate::view::{Layout, View};

/// Intensity at which delayed regions start to move.
pub const DELAYED_ONSET: f32 = 0.2;

/// How a zone's displacement follows the intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Onset {
    /// Scales with `p`.
    #[default]
    Primary,
    /// Scales with `max(0, (p - 0.2) / 0.8)`.
    Delayed,
}

/// One authored entry of a zone table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Normalized x coordinate of the ellipse center.
    pub cx: f32,
    /// Normalized y coordinate of the ellipse center.
    pub cy: f32,
    /// Normalized horizontal radius.
    pub rx: f32,
    /// Normalized vertical radius.
    pub ry: f32,
    /// Horizontal displacement as a fraction of the image width.
    pub dx: f32,
    /// Vertical displacement as a fraction of the image height.
    pub dy: f32,
    /// Which intensity ramp drives the zone.
    #[serde(default)]
    pub onset: Onset,
    /// Whether the center flips around the vertical axis with the view direction.
    #[serde(default)]
    pub mirror: bool,
}

impl ZoneSpec {
    /// Resolve the entry to a concrete zone.
    ///
    /// `dir` flips the horizontal displacement, and the center too when the
    /// entry is mirrored. `p` and `mp` are the primary and delayed ramps.
    pub fn resolve(&self, size: ImageSize, dir: f32, p: f32, mp: f32) -> WarpZone {
        let scale = match self.onset {
            Onset::Primary => p,
            Onset::Delayed => mp,
        };
        let cx = if self.mirror {
            0.5 + dir * (self.cx - 0.5)
        } else {
            self.cx
        };

        WarpZone {
            cx,
            cy: self.cy,
            rx: self.rx,
            ry: self.ry,
            dx: dir * self.dx * size.width as f32 * scale,
            dy: self.dy * size.height as f32 * scale,
        }
    }

    fn check(&self) -> Result<(), &'static str> {
        let finite = [self.cx, self.cy, self.rx, self.ry, self.dx, self.dy]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err("values must be finite");
        }
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return Err("radii must be positive");
        }
        Ok(())
    }
}

/// A full set of zone tables, one per layout.
///
/// The built-in tables are available through [`ZoneTable::builtin`]; a
/// replacement can be loaded from JSON with [`ZoneTable::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable {
    /// Entries for the front view.
    pub front: Vec<ZoneSpec>,
    /// Entries for the back view.
    pub back: Vec<ZoneSpec>,
    /// Entries for both profile views, authored facing right.
    pub profile: Vec<ZoneSpec>,
}

impl ZoneTable {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self {
            front: tables::FRONT.to_vec(),
            back: tables::BACK.to_vec(),
            profile: tables::PROFILE.to_vec(),
        }
    }

    /// Parse and validate a table from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, or an entry has a
    /// non-finite value or a non-positive radius.
    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        let table: ZoneTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Serialize the table to pretty printed JSON.
    pub fn to_json(&self) -> Result<String, PreviewError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every entry can be evaluated.
    pub fn validate(&self) -> Result<(), PreviewError> {
        for layout in [Layout::Front, Layout::Back, Layout::Profile] {
            for (index, spec) in self.layout_specs(layout).iter().enumerate() {
                spec.check()
                    .map_err(|reason| PreviewError::InvalidZoneTable {
                        layout: layout.name(),
                        index,
                        reason,
                    })?;
            }
        }
        Ok(())
    }

    /// The entries used by a view.
    pub fn specs(&self, view: View) -> &[ZoneSpec] {
        self.layout_specs(view.layout())
    }

    fn layout_specs(&self, layout: Layout) -> &[ZoneSpec] {
        match layout {
            Layout::Front => &self.front,
            Layout::Back => &self.back,
            Layout::Profile => &self.profile,
        }
    }
}

/// The built-in entries used by a view.
pub fn builtin_specs(view: View) -> &'static [ZoneSpec] {
    match view.layout() {
        Layout::Front => &tables::FRONT,
        Layout::Back => &tables::BACK,
        Layout::Profile => &tables::PROFILE,
    }
}

/// Generate the warp zones of a view from a list of entries.
///
/// Returns an empty list when the intensity is zero.
pub fn zones_from_specs(
    specs: &[ZoneSpec],
    view: View,
    size: ImageSize,
    intensity: Intensity,
) -> Vec<WarpZone> {
    if intensity.is_zero() {
        return Vec::new();
    }

    let p = intensity.value();
    let mp = intensity.ramp(DELAYED_ONSET);
    let dir = view.direction();

    specs
        .iter()
        .map(|spec| spec.resolve(size, dir, p, mp))
        .collect()
}

/// Generate the warp zones of a view from the built-in tables.
///
/// # Example
///
/// ```
/// use bodywarp::{warp_zones_for, Intensity, View};
/// use bodywarp::image::ImageSize;
///
/// let size = ImageSize { width: 400, height: 600 };
/// assert!(warp_zones_for(View::Front, size, Intensity::ZERO).is_empty());
/// assert_eq!(warp_zones_for(View::Front, size, Intensity::FULL).len(), 19);
/// ```
pub fn warp_zones_for(view: View, size: ImageSize, intensity: Intensity) -> Vec<WarpZone> {
    zones_from_specs(builtin_specs(view), view, size, intensity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SIZE: ImageSize = ImageSize {
        width: 400,
        height: 600,
    };

    #[test]
    fn zero_intensity_has_no_zones() {
        for view in View::ALL {
            assert!(warp_zones_for(view, SIZE, Intensity::ZERO).is_empty());
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(builtin_specs(View::Front).len(), 19);
        assert_eq!(builtin_specs(View::Back).len(), 10);
        assert_eq!(builtin_specs(View::Side).len(), 10);
        assert_eq!(builtin_specs(View::SideAlt), builtin_specs(View::Side));
    }

    #[test]
    fn builtin_tables_are_valid() -> Result<(), PreviewError> {
        ZoneTable::builtin().validate()
    }

    #[test]
    fn front_waist_displacement() {
        let zones = warp_zones_for(View::Front, SIZE, Intensity::from_fraction(0.5));
        assert_relative_eq!(zones[0].dx, -7.0, epsilon = 1e-4);
        assert_relative_eq!(zones[1].dx, 7.0, epsilon = 1e-4);
        assert_eq!(zones[0].dy, 0.0);
    }

    #[test]
    fn delayed_zones_wait_for_onset() {
        let zones = warp_zones_for(View::Front, SIZE, Intensity::from_fraction(0.1));
        for (spec, zone) in builtin_specs(View::Front).iter().zip(&zones) {
            match spec.onset {
                Onset::Delayed => {
                    assert_eq!(zone.dx, 0.0);
                    assert_eq!(zone.dy, 0.0);
                }
                Onset::Primary => assert!(zone.dx != 0.0 || zone.dy != 0.0),
            }
        }
    }

    #[test]
    fn delayed_zones_reach_full_effect() {
        let zones = warp_zones_for(View::Front, SIZE, Intensity::FULL);
        // left shoulder
        assert_relative_eq!(zones[13].dx, 0.02 * 400.0, epsilon = 1e-4);
    }

    #[test]
    fn profile_views_mirror() {
        let p = Intensity::from_fraction(0.8);
        let side = warp_zones_for(View::Side, SIZE, p);
        let alt = warp_zones_for(View::SideAlt, SIZE, p);
        assert_eq!(side.len(), alt.len());

        for (spec, (a, b)) in builtin_specs(View::Side).iter().zip(side.iter().zip(&alt)) {
            assert_eq!(a.dx, -b.dx);
            assert_eq!(a.dy, b.dy);
            if spec.mirror {
                assert_relative_eq!(a.cx, 1.0 - b.cx, epsilon = 1e-6);
            } else {
                assert_eq!(a.cx, b.cx);
            }
        }
    }

    #[test]
    fn table_json_roundtrip() -> Result<(), PreviewError> {
        let table = ZoneTable::builtin();
        let parsed = ZoneTable::from_json(&table.to_json()?)?;
        assert_eq!(parsed, table);
        Ok(())
    }

    #[test]
    fn table_rejects_bad_radius() {
        let json = r#"{
            "front": [{"cx": 0.5, "cy": 0.5, "rx": 0.0, "ry": 0.1, "dx": 0.01, "dy": 0.0}],
            "back": [],
            "profile": []
        }"#;
        let res = ZoneTable::from_json(json);
        assert!(matches!(
            res,
            Err(PreviewError::InvalidZoneTable {
                layout: "front",
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn custom_table_defaults_to_primary() -> Result<(), PreviewError> {
        let json = r#"{
            "front": [{"cx": 0.5, "cy": 0.5, "rx": 0.2, "ry": 0.1, "dx": 0.01, "dy": 0.0}],
            "back": [],
            "profile": []
        }"#;
        let table = ZoneTable::from_json(json)?;
        let zones = zones_from_specs(table.specs(View::Front), View::Front, SIZE, Intensity::FULL);
        assert_eq!(zones.len(), 1);
        assert_relative_eq!(zones[0].dx, 4.0, epsilon = 1e-5);
        assert!(zones_from_specs(table.specs(View::Back), View::Back, SIZE, Intensity::FULL).is_empty());
        Ok(())
    }
}
