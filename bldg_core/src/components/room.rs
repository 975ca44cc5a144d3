//! # Rooms
//!
//! A room is a typed space bounded by an ordered list of walls. The room
//! type decides which code checks apply (only bedrooms need egress).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::wall::Wall;
use super::window::Window;
use crate::errors::{require_positive, BldgError, BldgResult};
use crate::units::Feet;

/// IRC room classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Bedroom,
    Kitchen,
    Bathroom,
    #[serde(rename = "Living Room")]
    Living,
    Utility,
}

impl RoomType {
    /// All room types
    pub const ALL: [RoomType; 5] = [
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::Living,
        RoomType::Utility,
    ];

    /// Display label, e.g. "Living Room"
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
            RoomType::Living => "Living Room",
            RoomType::Utility => "Utility",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomType {
    type Err = BldgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RoomType::ALL
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BldgError::unknown_variant("room type", s))
    }
}

/// Room assembly: type, ceiling height and bounding walls.
///
/// ## JSON Example
///
/// ```json
/// {
///   "room_type": "Bedroom",
///   "ceiling_height_feet": 8.0,
///   "walls": [ { "length_feet": 12.0, "height_feet": 8.0, "framing_type": "2x6 @ 16oc", "is_exterior": true } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// IRC room classification
    pub room_type: RoomType,

    /// Finished ceiling height in feet
    pub ceiling_height_feet: f64,

    /// Bounding walls (at least one)
    pub walls: Vec<Wall>,
}

impl Room {
    /// Create a validated room.
    pub fn new(room_type: RoomType, ceiling_height_feet: f64, walls: Vec<Wall>) -> BldgResult<Self> {
        let room = Room {
            room_type,
            ceiling_height_feet,
            walls,
        };
        room.validate()?;
        Ok(room)
    }

    /// Validate this room and all of its walls.
    pub fn validate(&self) -> BldgResult<()> {
        require_positive(
            "ceiling_height_feet",
            self.ceiling_height_feet,
            "Ceiling height must be positive",
        )?;
        if self.walls.is_empty() {
            return Err(BldgError::missing_field("walls"));
        }
        for (i, wall) in self.walls.iter().enumerate() {
            wall.validate().map_err(|e| e.within(&format!("walls[{}]", i)))?;
        }
        Ok(())
    }

    /// Approximate floor area from wall dimensions.
    ///
    /// Assumes a rectangular room whose first two walls are adjacent sides;
    /// with fewer than two walls the area is 0.
    pub fn total_floor_area_sqft(&self) -> f64 {
        match self.walls.as_slice() {
            [first, second, ..] => (Feet(first.length_feet) * Feet(second.length_feet)).value(),
            _ => 0.0,
        }
    }

    /// All windows across all walls, in wall order then per-wall order.
    pub fn all_windows(&self) -> Vec<&Window> {
        self.walls.iter().flat_map(|w| w.windows.iter()).collect()
    }

    /// Number of window openings in the room
    pub fn window_count(&self) -> usize {
        self.walls.iter().map(|w| w.windows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FramingType;

    fn wall(length: f64) -> Wall {
        Wall::new(length, 8.0, FramingType::Stud2x4At16, false).unwrap()
    }

    #[test]
    fn test_floor_area_uses_first_two_walls() {
        let room = Room::new(RoomType::Kitchen, 8.0, vec![wall(12.0), wall(10.0), wall(12.0), wall(10.0)]).unwrap();
        assert_eq!(room.total_floor_area_sqft(), 120.0);
    }

    #[test]
    fn test_floor_area_is_a_known_approximation() {
        // Parallel walls listed first still multiply together; topology is not inferred.
        let room = Room::new(RoomType::Kitchen, 8.0, vec![wall(12.0), wall(12.0), wall(10.0), wall(10.0)]).unwrap();
        assert_eq!(room.total_floor_area_sqft(), 144.0);
    }

    #[test]
    fn test_floor_area_single_wall_is_zero() {
        let room = Room::new(RoomType::Utility, 8.0, vec![wall(12.0)]).unwrap();
        assert_eq!(room.total_floor_area_sqft(), 0.0);
    }

    #[test]
    fn test_all_windows_preserves_order() {
        let a = Window::new(24.0, 24.0, 0.3).unwrap();
        let b = Window::new(30.0, 40.0, 0.3).unwrap();
        let c = Window::new(36.0, 48.0, 0.3).unwrap();
        let room = Room::new(
            RoomType::Bedroom,
            8.0,
            vec![
                wall(12.0).with_window(a.clone()).with_window(b.clone()),
                wall(10.0),
                wall(12.0).with_window(c.clone()),
            ],
        )
        .unwrap();

        let windows = room.all_windows();
        assert_eq!(windows, vec![&a, &b, &c]);
        assert_eq!(room.window_count(), 3);
    }

    #[test]
    fn test_room_requires_walls() {
        let err = Room::new(RoomType::Bedroom, 8.0, vec![]).unwrap_err();
        assert_eq!(err, BldgError::missing_field("walls"));
    }

    #[test]
    fn test_room_requires_positive_ceiling() {
        assert!(Room::new(RoomType::Bedroom, 0.0, vec![wall(10.0)]).is_err());
    }

    #[test]
    fn test_room_type_labels() {
        assert_eq!(serde_json::to_string(&RoomType::Living).unwrap(), "\"Living Room\"");
        assert_eq!("living room".parse::<RoomType>().unwrap(), RoomType::Living);
        assert!("Garage".parse::<RoomType>().is_err());
        assert_eq!(RoomType::Bathroom.to_string(), "Bathroom");
    }
}
