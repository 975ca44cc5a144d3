//! # Walls
//!
//! A wall is a straight framed run with an ordered layer assembly and any
//! number of window openings. Geometry is rectangular: gross area is
//! length × height and openings are deducted by their rough area.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::framing::FramingType;
use super::layer::MaterialLayer;
use super::window::Window;
use crate::errors::{require_positive, BldgError, BldgResult};
use crate::units::{Feet, SqFt};

/// Lowest residential wall height accepted (feet)
pub const MIN_WALL_HEIGHT_FT: f64 = 6.0;

/// Highest residential wall height accepted (feet)
pub const MAX_WALL_HEIGHT_FT: f64 = 20.0;

/// Framed wall with layers and openings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_feet": 12.0,
///   "height_feet": 8.0,
///   "framing_type": "2x6 @ 16oc",
///   "is_exterior": true,
///   "layers": [
///     { "name": "OSB Sheathing", "thickness_inches": 0.5, "r_value": 0.6 },
///     { "name": "Fiberglass Batt R-19", "thickness_inches": 5.5, "r_value": 19.0 }
///   ],
///   "windows": [
///     { "width_inches": 36, "height_inches": 48, "u_factor": 0.28 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Run length in feet
    pub length_feet: f64,

    /// Wall height in feet, 6 to 20 inclusive
    pub height_feet: f64,

    /// Stud size and spacing
    pub framing_type: FramingType,

    /// Exterior (thermal envelope, sits on a footing) vs interior partition
    pub is_exterior: bool,

    /// Assembly layers, outside to inside
    #[serde(default)]
    pub layers: Vec<MaterialLayer>,

    /// Window openings in this wall
    #[serde(default)]
    pub windows: Vec<Window>,
}

impl Wall {
    /// Create a validated wall with no layers or openings.
    ///
    /// ```rust
    /// use bldg_core::components::{FramingType, Wall};
    ///
    /// let wall = Wall::new(12.0, 8.0, FramingType::Stud2x4At16, false)?;
    /// assert_eq!(wall.area_sqft(), 96.0);
    /// assert_eq!(wall.total_r_value(), 0.0);
    ///
    /// assert!(Wall::new(12.0, 5.5, FramingType::Stud2x4At16, false).is_err());
    /// # Ok::<(), bldg_core::errors::BldgError>(())
    /// ```
    pub fn new(length_feet: f64, height_feet: f64, framing_type: FramingType, is_exterior: bool) -> BldgResult<Self> {
        let wall = Wall {
            length_feet,
            height_feet,
            framing_type,
            is_exterior,
            layers: Vec::new(),
            windows: Vec::new(),
        };
        wall.validate()?;
        Ok(wall)
    }

    /// Append a layer to the assembly.
    pub fn with_layer(mut self, layer: MaterialLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Append several layers to the assembly, in order.
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = MaterialLayer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Add a window opening.
    pub fn with_window(mut self, window: Window) -> Self {
        self.windows.push(window);
        self
    }

    /// Validate this wall and all of its layers and windows.
    pub fn validate(&self) -> BldgResult<()> {
        require_positive("length_feet", self.length_feet, "Wall length must be positive")?;
        if !(MIN_WALL_HEIGHT_FT..=MAX_WALL_HEIGHT_FT).contains(&self.height_feet) {
            let reason = if self.height_feet > MAX_WALL_HEIGHT_FT {
                "Wall height cannot exceed 20 feet (residential)"
            } else {
                "Wall height must be at least 6 feet"
            };
            return Err(BldgError::invalid_input(
                "height_feet",
                self.height_feet.to_string(),
                reason,
            ));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            layer.validate().map_err(|e| e.within(&format!("layers[{}]", i)))?;
        }
        for (i, window) in self.windows.iter().enumerate() {
            window.validate().map_err(|e| e.within(&format!("windows[{}]", i)))?;
        }
        Ok(())
    }

    /// Gross wall area in square feet
    pub fn area_sqft(&self) -> f64 {
        (Feet(self.length_feet) * Feet(self.height_feet)).value()
    }

    /// Wall area minus window openings
    pub fn net_area_sqft(&self) -> f64 {
        let openings: SqFt = self.windows.iter().map(|w| SqFt(w.area_sqft())).sum();
        (SqFt(self.area_sqft()) - openings).value()
    }

    /// Total thermal resistance of the assembly (series sum of layers)
    pub fn total_r_value(&self) -> f64 {
        // fold from +0.0; an empty f64 `sum()` yields -0.0
        self.layers.iter().fold(0.0, |acc, l| acc + l.r_value)
    }

    /// On-center stud spacing in inches
    pub fn stud_spacing_inches(&self) -> u32 {
        self.framing_type.stud_spacing_inches()
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.is_exterior { "EXT" } else { "INT" };
        write!(
            f,
            "Wall [{}] {}'x{}' ({})",
            location, self.length_feet, self.height_feet, self.framing_type
        )
    }
}
