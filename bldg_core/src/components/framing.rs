//! Wall Framing Configurations
//!
//! Stud size and on-center spacing for wood-framed walls.
//!
//! ## Nominal vs Actual Dimensions
//!
//! - 2x4 nominal = 1.5" x 3.5" actual
//! - 2x6 nominal = 1.5" x 5.5" actual
//!
//! ## Spacing Fallback
//!
//! Framing arrives over the wire as a label such as `"2x6 @ 16oc"`. Known
//! labels parse into [`FramingType`], whose spacing lookup is exhaustive.
//! [`stud_spacing_for_label`] is the lenient path for raw labels: anything
//! that does not name a known configuration is estimated at
//! [`DEFAULT_STUD_SPACING_IN`] (16" o.c.) instead of being rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BldgError;

/// Spacing assumed for a framing label that does not name a known configuration
pub const DEFAULT_STUD_SPACING_IN: u32 = 16;

/// Standard wood stud sizes used for wall framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudSize {
    /// 2x4 (1.5" x 3.5")
    #[serde(rename = "2x4")]
    L2x4,
    /// 2x6 (1.5" x 5.5")
    #[serde(rename = "2x6")]
    L2x6,
}

impl StudSize {
    /// Get the actual dimensions (width, depth) in inches
    pub fn actual_dimensions(&self) -> (f64, f64) {
        match self {
            StudSize::L2x4 => (1.5, 3.5),
            StudSize::L2x6 => (1.5, 5.5),
        }
    }

    /// Nominal designation, e.g. "2x6"
    pub fn nominal(&self) -> &'static str {
        match self {
            StudSize::L2x4 => "2x4",
            StudSize::L2x6 => "2x6",
        }
    }

    /// Cavity depth available for insulation (actual stud depth) in inches
    pub fn cavity_depth_in(&self) -> f64 {
        self.actual_dimensions().1
    }
}

impl fmt::Display for StudSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nominal())
    }
}

/// Standard wood framing configurations (stud size @ on-center spacing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FramingType {
    /// 2x4 studs at 16" on center
    #[serde(rename = "2x4 @ 16oc")]
    Stud2x4At16,
    /// 2x4 studs at 24" on center
    #[serde(rename = "2x4 @ 24oc")]
    Stud2x4At24,
    /// 2x6 studs at 16" on center
    #[serde(rename = "2x6 @ 16oc")]
    Stud2x6At16,
    /// 2x6 studs at 24" on center
    #[serde(rename = "2x6 @ 24oc")]
    Stud2x6At24,
}

impl FramingType {
    /// All framing configurations
    pub const ALL: [FramingType; 4] = [
        FramingType::Stud2x4At16,
        FramingType::Stud2x4At24,
        FramingType::Stud2x6At16,
        FramingType::Stud2x6At24,
    ];

    /// Wire label, e.g. "2x6 @ 16oc"
    pub fn label(&self) -> &'static str {
        match self {
            FramingType::Stud2x4At16 => "2x4 @ 16oc",
            FramingType::Stud2x4At24 => "2x4 @ 24oc",
            FramingType::Stud2x6At16 => "2x6 @ 16oc",
            FramingType::Stud2x6At24 => "2x6 @ 24oc",
        }
    }

    /// Stud size for this configuration
    pub fn stud_size(&self) -> StudSize {
        match self {
            FramingType::Stud2x4At16 | FramingType::Stud2x4At24 => StudSize::L2x4,
            FramingType::Stud2x6At16 | FramingType::Stud2x6At24 => StudSize::L2x6,
        }
    }

    /// On-center stud spacing in inches
    pub fn stud_spacing_inches(&self) -> u32 {
        match self {
            FramingType::Stud2x4At16 | FramingType::Stud2x6At16 => 16,
            FramingType::Stud2x4At24 | FramingType::Stud2x6At24 => 24,
        }
    }
}

impl fmt::Display for FramingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FramingType {
    type Err = BldgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FramingType::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BldgError::unknown_variant("framing type", s))
    }
}

/// Stud spacing for a raw framing label, falling back to
/// [`DEFAULT_STUD_SPACING_IN`] when the label is not recognized.
///
/// ```rust
/// use bldg_core::components::stud_spacing_for_label;
///
/// assert_eq!(stud_spacing_for_label("2x4 @ 24oc"), 24);
/// assert_eq!(stud_spacing_for_label("3x8 @ 19.2oc"), 16);
/// ```
pub fn stud_spacing_for_label(label: &str) -> u32 {
    label
        .parse::<FramingType>()
        .map(|f| f.stud_spacing_inches())
        .unwrap_or(DEFAULT_STUD_SPACING_IN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_by_configuration() {
        assert_eq!(FramingType::Stud2x4At16.stud_spacing_inches(), 16);
        assert_eq!(FramingType::Stud2x4At24.stud_spacing_inches(), 24);
        assert_eq!(FramingType::Stud2x6At16.stud_spacing_inches(), 16);
        assert_eq!(FramingType::Stud2x6At24.stud_spacing_inches(), 24);
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_16() {
        assert_eq!(stud_spacing_for_label("steel @ 12oc"), DEFAULT_STUD_SPACING_IN);
        assert_eq!(stud_spacing_for_label(""), 16);
    }

    #[test]
    fn test_label_parsing() {
        for framing in FramingType::ALL {
            assert_eq!(framing.label().parse::<FramingType>().unwrap(), framing);
        }
        assert_eq!(" 2X6 @ 24OC ".parse::<FramingType>().unwrap(), FramingType::Stud2x6At24);
        assert!("2x8 @ 16oc".parse::<FramingType>().is_err());
    }

    #[test]
    fn test_stud_size() {
        assert_eq!(FramingType::Stud2x6At24.stud_size(), StudSize::L2x6);
        assert_eq!(FramingType::Stud2x4At16.stud_size().actual_dimensions(), (1.5, 3.5));
        assert_eq!(StudSize::L2x6.cavity_depth_in(), 5.5);
        assert_eq!(StudSize::L2x4.to_string(), "2x4");
    }

    #[test]
    fn test_serialization_uses_wire_labels() {
        let json = serde_json::to_string(&FramingType::Stud2x6At16).unwrap();
        assert_eq!(json, "\"2x6 @ 16oc\"");

        let roundtrip: FramingType = serde_json::from_str("\"2x4 @ 24oc\"").unwrap();
        assert_eq!(roundtrip, FramingType::Stud2x4At24);
    }
}
