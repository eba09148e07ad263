use serde::{Deserialize, Serialize};

/// The camera view a photograph was taken from.
///
/// `Side` and `SideAlt` are mirror images of the same profile layout: the
/// horizontal displacement of every zone and the x position of the mirrored
/// landmarks flip between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Facing the camera.
    Front,
    /// Back to the camera.
    Back,
    /// Profile, facing right in the picture.
    Side,
    /// Profile, facing left in the picture.
    #[serde(alias = "sideAlt")]
    SideAlt,
}

/// The zone layout shared by one or more views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Frontal layout.
    Front,
    /// Dorsal layout.
    Back,
    /// Profile layout, authored facing right.
    Profile,
}

impl Layout {
    /// Lowercase name of the layout.
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Front => "front",
            Layout::Back => "back",
            Layout::Profile => "profile",
        }
    }
}

impl View {
    /// All the views.
    pub const ALL: [View; 4] = [View::Front, View::Back, View::Side, View::SideAlt];

    /// The zone layout used by this view.
    pub fn layout(&self) -> Layout {
        match self {
            View::Front => Layout::Front,
            View::Back => Layout::Back,
            View::Side | View::SideAlt => Layout::Profile,
        }
    }

    /// Horizontal direction sign, `-1` for the mirrored profile and `+1` otherwise.
    pub fn direction(&self) -> f32 {
        match self {
            View::SideAlt => -1.0,
            _ => 1.0,
        }
    }

    /// Whether the view is one of the two profiles.
    pub fn is_profile(&self) -> bool {
        self.layout() == Layout::Profile
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            View::Front => "front",
            View::Back => "back",
            View::Side => "side",
            View::SideAlt => "side_alt",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(View::Front),
            "back" => Ok(View::Back),
            "side" => Ok(View::Side),
            "side_alt" | "sideAlt" => Ok(View::SideAlt),
            _ => Err(format!(
                "unknown view '{s}', expected one of front, back, side, side_alt"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_layouts() {
        assert_eq!(View::Front.layout(), Layout::Front);
        assert_eq!(View::Back.layout(), Layout::Back);
        assert_eq!(View::Side.layout(), View::SideAlt.layout());
        assert!(View::SideAlt.is_profile());
        assert!(!View::Back.is_profile());
    }

    #[test]
    fn view_direction() {
        assert_eq!(View::Side.direction(), 1.0);
        assert_eq!(View::SideAlt.direction(), -1.0);
        assert_eq!(View::Front.direction(), 1.0);
    }

    #[test]
    fn view_parse_roundtrip() {
        for view in View::ALL {
            assert_eq!(view.to_string().parse::<View>(), Ok(view));
        }
        assert_eq!("sideAlt".parse::<View>(), Ok(View::SideAlt));
        assert!("top".parse::<View>().is_err());
    }

    #[test]
    fn view_serde_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&View::SideAlt)?, "\"side_alt\"");
        assert_eq!(serde_json::from_str::<View>("\"sideAlt\"")?, View::SideAlt);
        Ok(())
    }
}
