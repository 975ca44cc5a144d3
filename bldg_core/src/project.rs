//! # Project Data Structures
//!
//! The `Project` struct is the root of the component tree. It carries the
//! site context (ZIP, IECC climate zone) that drives the energy checks.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── name, location_zip
//! ├── climate_zone: ClimateZone (IECC 1-8)
//! └── rooms: Vec<Room>
//!     └── walls: Vec<Wall>
//!         ├── layers: Vec<MaterialLayer>
//!         └── windows: Vec<Window>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::project::Project;
//!
//! let json = r#"{
//!   "name": "Maine Residence",
//!   "location_zip": "04101",
//!   "climate_zone": 6,
//!   "rooms": [{
//!     "room_type": "Bedroom",
//!     "ceiling_height_feet": 8.0,
//!     "walls": [{ "length_feet": 12.0, "height_feet": 8.0, "framing_type": "2x6 @ 16oc", "is_exterior": true }]
//!   }]
//! }"#;
//!
//! let project = Project::from_json(json)?;
//! assert_eq!(project.climate_zone.number(), 6);
//! # Ok::<(), bldg_core::errors::BldgError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::Room;
use crate::errors::{BldgError, BldgResult};

/// IECC climate zone classification.
///
/// Serializes as its bare zone number (`6`, not `"Zone6"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ClimateZone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
    Zone6,
    Zone7,
    Zone8,
}

impl ClimateZone {
    /// All climate zones, warmest first
    pub const ALL: [ClimateZone; 8] = [
        ClimateZone::Zone1,
        ClimateZone::Zone2,
        ClimateZone::Zone3,
        ClimateZone::Zone4,
        ClimateZone::Zone5,
        ClimateZone::Zone6,
        ClimateZone::Zone7,
        ClimateZone::Zone8,
    ];

    /// Zone number, 1 through 8
    pub fn number(&self) -> u8 {
        match self {
            ClimateZone::Zone1 => 1,
            ClimateZone::Zone2 => 2,
            ClimateZone::Zone3 => 3,
            ClimateZone::Zone4 => 4,
            ClimateZone::Zone5 => 5,
            ClimateZone::Zone6 => 6,
            ClimateZone::Zone7 => 7,
            ClimateZone::Zone8 => 8,
        }
    }
}

impl TryFrom<u8> for ClimateZone {
    type Error = BldgError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ClimateZone::ALL
            .iter()
            .copied()
            .find(|z| z.number() == value)
            .ok_or_else(|| BldgError::unknown_variant("climate zone", value.to_string()))
    }
}

impl From<ClimateZone> for u8 {
    fn from(zone: ClimateZone) -> u8 {
        zone.number()
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,

    /// Site ZIP code (not format-checked)
    pub location_zip: String,

    /// IECC climate zone of the site
    pub climate_zone: ClimateZone,

    /// Rooms in the project (at least one)
    pub rooms: Vec<Room>,
}

impl Project {
    /// Create a validated project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bldg_core::components::{FramingType, Room, RoomType, Wall};
    /// use bldg_core::project::{ClimateZone, Project};
    ///
    /// let wall = Wall::new(10.0, 8.0, FramingType::Stud2x4At16, false)?;
    /// let room = Room::new(RoomType::Utility, 8.0, vec![wall])?;
    /// let project = Project::new("Shop", "97201", ClimateZone::Zone4, vec![room])?;
    /// assert_eq!(project.total_walls(), 1);
    ///
    /// assert!(Project::new("Empty", "97201", ClimateZone::Zone4, vec![]).is_err());
    /// # Ok::<(), bldg_core::errors::BldgError>(())
    /// ```
    pub fn new(
        name: impl Into<String>,
        location_zip: impl Into<String>,
        climate_zone: ClimateZone,
        rooms: Vec<Room>,
    ) -> BldgResult<Self> {
        let project = Project {
            name: name.into(),
            location_zip: location_zip.into(),
            climate_zone,
            rooms,
        };
        project.validate()?;
        Ok(project)
    }

    /// Validate the whole component tree.
    ///
    /// Errors name the offending field by path, e.g.
    /// `rooms[1].walls[0].height_feet`.
    pub fn validate(&self) -> BldgResult<()> {
        if self.rooms.is_empty() {
            return Err(BldgError::missing_field("rooms"));
        }
        for (i, room) in self.rooms.iter().enumerate() {
            room.validate().map_err(|e| e.within(&format!("rooms[{}]", i)))?;
        }
        Ok(())
    }

    /// Parse a project from JSON and validate it.
    pub fn from_json(json: &str) -> BldgResult<Self> {
        let project: Project = serde_json::from_str(json)?;
        project.validate()?;
        Ok(project)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> BldgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of walls across all rooms
    pub fn total_walls(&self) -> usize {
        self.rooms.iter().map(|r| r.walls.len()).sum()
    }

    /// Number of windows across all rooms
    pub fn total_windows(&self) -> usize {
        self.rooms.iter().map(|r| r.window_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FramingType, RoomType, Wall, Window};

    fn sample_project() -> Project {
        let wall = Wall::new(12.0, 8.0, FramingType::Stud2x6At16, true)
            .unwrap()
            .with_window(Window::new(36.0, 48.0, 0.28).unwrap());
        let room = Room::new(RoomType::Bedroom, 8.0, vec![wall]).unwrap();
        Project::new("Maine Residence", "04101", ClimateZone::Zone6, vec![room]).unwrap()
    }

    #[test]
    fn test_project_creation() {
        let project = sample_project();
        assert_eq!(project.name, "Maine Residence");
        assert_eq!(project.location_zip, "04101");
        assert_eq!(project.total_walls(), 1);
        assert_eq!(project.total_windows(), 1);
    }

    #[test]
    fn test_project_requires_rooms() {
        let err = Project::new("Empty", "04101", ClimateZone::Zone6, vec![]).unwrap_err();
        assert_eq!(err, BldgError::missing_field("rooms"));
    }

    #[test]
    fn test_project_serialization() {
        let project = sample_project();
        let json = project.to_json_pretty().unwrap();

        assert!(json.contains("\"climate_zone\": 6"));
        assert!(json.contains("\"2x6 @ 16oc\""));
        assert!(json.contains("\"Bedroom\""));

        let roundtrip = Project::from_json(&json).unwrap();
        assert_eq!(roundtrip, project);
    }

    #[test]
    fn test_from_json_rejects_invalid_tree() {
        let json = r#"{
            "name": "Tall",
            "location_zip": "04101",
            "climate_zone": 5,
            "rooms": [{
                "room_type": "Kitchen",
                "ceiling_height_feet": 8.0,
                "walls": [{ "length_feet": 10.0, "height_feet": 24.0, "framing_type": "2x4 @ 16oc", "is_exterior": false }]
            }]
        }"#;
        match Project::from_json(json).unwrap_err() {
            BldgError::InvalidInput { field, .. } => assert_eq!(field, "rooms[0].walls[0].height_feet"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_unknown_zone() {
        let json = r#"{ "name": "X", "location_zip": "0", "climate_zone": 9, "rooms": [] }"#;
        let err = Project::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_climate_zone_conversions() {
        for n in 1..=8u8 {
            let zone = ClimateZone::try_from(n).unwrap();
            assert_eq!(u8::from(zone), n);
        }
        assert!(ClimateZone::try_from(0).is_err());
        assert_eq!(serde_json::to_string(&ClimateZone::Zone7).unwrap(), "7");
        assert_eq!(ClimateZone::Zone3.to_string(), "3");
    }
}
