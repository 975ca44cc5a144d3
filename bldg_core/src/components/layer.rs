//! Wall assembly layers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, BldgError, BldgResult};

/// One material ply in a wall's cross-section.
///
/// Layers act as thermal resistances in series, so an assembly's R-value is
/// the plain sum of its layers.
///
/// ## JSON Example
///
/// ```json
/// { "name": "Fiberglass Batt R-19", "thickness_inches": 5.5, "r_value": 19.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLayer {
    /// Layer material name (e.g., "OSB Sheathing")
    pub name: String,

    /// Nominal thickness in inches
    pub thickness_inches: f64,

    /// Thermal resistance (ft²·°F·h/BTU)
    pub r_value: f64,
}

impl MaterialLayer {
    /// Create a validated layer.
    pub fn new(name: impl Into<String>, thickness_inches: f64, r_value: f64) -> BldgResult<Self> {
        let layer = MaterialLayer {
            name: name.into(),
            thickness_inches,
            r_value,
        };
        layer.validate()?;
        Ok(layer)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> BldgResult<()> {
        require_positive("thickness_inches", self.thickness_inches, "Thickness must be positive")?;
        if !(self.r_value >= 0.0 && self.r_value.is_finite()) {
            return Err(BldgError::invalid_input(
                "r_value",
                self.r_value.to_string(),
                "R-value cannot be negative",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for MaterialLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}\" @ R-{})", self.name, self.thickness_inches, self.r_value)
    }
}
