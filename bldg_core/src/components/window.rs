//! Window openings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, BldgError, BldgResult};
use crate::units::{Inches, SqFt};

/// Window style used when none is given
pub const DEFAULT_WINDOW_TYPE: &str = "Double-Hung";

/// Highest U-factor accepted for a window unit
pub const MAX_U_FACTOR: f64 = 2.0;

/// Share of a window's area assumed operable for egress
pub const EGRESS_OPERABLE_FRACTION: f64 = 0.9;

fn default_window_type() -> String {
    DEFAULT_WINDOW_TYPE.to_string()
}

/// Window component with egress and thermal properties.
///
/// ## JSON Example
///
/// ```json
/// { "width_inches": 36, "height_inches": 48, "u_factor": 0.30, "window_type": "Casement" }
/// ```
///
/// `window_type` may be omitted and defaults to `"Double-Hung"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Rough width in inches
    pub width_inches: f64,

    /// Rough height in inches
    pub height_inches: f64,

    /// Thermal transmittance (BTU/h·ft²·°F)
    pub u_factor: f64,

    /// Window style label (free-form)
    #[serde(default = "default_window_type")]
    pub window_type: String,
}

impl Window {
    /// Create a validated double-hung window.
    ///
    /// ```rust
    /// use bldg_core::components::Window;
    ///
    /// let w = Window::new(36.0, 48.0, 0.30)?.with_type("Casement");
    /// assert_eq!(w.area_sqft(), 12.0);
    /// # Ok::<(), bldg_core::errors::BldgError>(())
    /// ```
    pub fn new(width_inches: f64, height_inches: f64, u_factor: f64) -> BldgResult<Self> {
        let window = Window {
            width_inches,
            height_inches,
            u_factor,
            window_type: default_window_type(),
        };
        window.validate()?;
        Ok(window)
    }

    /// Set the window style label.
    pub fn with_type(mut self, window_type: impl Into<String>) -> Self {
        self.window_type = window_type.into();
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> BldgResult<()> {
        require_positive("width_inches", self.width_inches, "Width must be positive")?;
        require_positive("height_inches", self.height_inches, "Height must be positive")?;
        if !(self.u_factor > 0.0 && self.u_factor <= MAX_U_FACTOR) {
            return Err(BldgError::invalid_input(
                "u_factor",
                self.u_factor.to_string(),
                format!("U-factor must be greater than 0 and at most {:?}", MAX_U_FACTOR),
            ));
        }
        Ok(())
    }

    /// Total window area in square feet
    pub fn area_sqft(&self) -> f64 {
        let area: SqFt = (Inches(self.width_inches) * Inches(self.height_inches)).into();
        area.value()
    }

    /// Clear opening used for egress, estimated as 90% of the total area.
    pub fn clear_opening_sqft(&self) -> f64 {
        self.area_sqft() * EGRESS_OPERABLE_FRACTION
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window {}\"x{}\" (U={})",
            self.width_inches, self.height_inches, self.u_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_and_clear_opening() {
        let w = Window::new(36.0, 48.0, 0.28).unwrap();
        assert_relative_eq!(w.area_sqft(), 12.0);
        assert_relative_eq!(w.clear_opening_sqft(), 10.8, epsilon = 1e-9);

        let small = Window::new(24.0, 24.0, 0.30).unwrap();
        assert_relative_eq!(small.area_sqft(), 4.0);
        assert_relative_eq!(small.clear_opening_sqft(), 3.6, epsilon = 1e-9);
    }

    #[test]
    fn test_default_type() {
        let w = Window::new(24.0, 36.0, 0.3).unwrap();
        assert_eq!(w.window_type, "Double-Hung");

        let json = r#"{ "width_inches": 24, "height_inches": 36, "u_factor": 0.3 }"#;
        let parsed: Window = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.window_type, DEFAULT_WINDOW_TYPE);
    }

    #[test]
    fn test_u_factor_bounds() {
        assert!(Window::new(24.0, 24.0, 2.0).is_ok());
        assert!(Window::new(24.0, 24.0, 2.01).is_err());
        assert!(Window::new(24.0, 24.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Window::new(-24.0, 24.0, 0.3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(Window::new(24.0, 0.0, 0.3).is_err());
    }

    #[test]
    fn test_display() {
        let w = Window::new(24.0, 24.0, 0.3).unwrap();
        assert_eq!(w.to_string(), "Window 24\"x24\" (U=0.3)");
    }
}
