//! # Material Takeoff
//!
//! Bill of materials for wood-framed walls, aggregated wall → room → project.
//!
//! ## Estimating Rules
//!
//! - Studs: `floor(length_in / spacing) + 1` along the run, plus 3 plate
//!   pieces (one bottom plate, double top plate) tallied at wall height
//! - Top plate: double, `2 × length` linear feet (lapped joints)
//! - Bottom plate: single, `1 × length`
//! - Sheathing and drywall: gross wall area (openings not deducted; the
//!   overage covers waste)
//! - Insulation: net wall area (openings deducted)
//! - Gravel: continuous footing trench 2 ft wide × 0.5 ft deep under
//!   exterior walls only, in cubic yards
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::calculations::takeoff::wall_materials;
//! use bldg_core::components::{FramingType, Wall};
//!
//! let wall = Wall::new(12.0, 8.0, FramingType::Stud2x6At16, true)?;
//! let bom = wall_materials(&wall);
//!
//! // 144" / 16" = 9, + 1 leading stud, + 3 plates
//! assert_eq!(bom.studs_count, 13);
//! assert_eq!(bom.top_plate_lf, 24.0);
//! # Ok::<(), bldg_core::errors::BldgError>(())
//! ```

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::{Room, Wall};
use crate::project::Project;
use crate::units::{CuFt, CuYd, Feet, Inches};

/// Plate pieces counted with the studs: one bottom plate, two top plates
pub const PLATE_PIECES: u64 = 3;

/// Footing trench width in feet
pub const TRENCH_WIDTH_FT: f64 = 2.0;

/// Footing trench depth in feet (6")
pub const TRENCH_DEPTH_FT: f64 = 0.5;

/// Coverage of one 4x8 panel sheet in square feet
pub const SHEET_AREA_SQFT: f64 = 32.0;

/// Quantity takeoff for a wall, room or project.
///
/// All eight quantities are always present; `Default` is the all-zero
/// record and the identity for [`Add`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "studs_count": 48,
///   "stud_linear_feet": 384.0,
///   "top_plate_lf": 88.0,
///   "bottom_plate_lf": 44.0,
///   "sheathing_sqft": 352.0,
///   "drywall_sqft": 352.0,
///   "insulation_sqft": 340.0,
///   "gravel_cubic_yards": 1.26
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillOfMaterials {
    /// Stud pieces, plates included
    pub studs_count: u64,
    /// Stud pieces × wall height (linear feet)
    pub stud_linear_feet: f64,
    /// Top plate linear feet (double plate)
    pub top_plate_lf: f64,
    /// Bottom plate linear feet
    pub bottom_plate_lf: f64,
    /// Exterior sheathing, gross area (sq ft)
    pub sheathing_sqft: f64,
    /// Interior drywall, gross area (sq ft)
    pub drywall_sqft: f64,
    /// Cavity insulation, net area (sq ft)
    pub insulation_sqft: f64,
    /// Footing trench gravel (cu yd)
    pub gravel_cubic_yards: f64,
}

impl BillOfMaterials {
    /// Copy with every real quantity rounded to 2 decimals for display.
    /// `studs_count` is already whole.
    pub fn rounded(&self) -> Self {
        BillOfMaterials {
            studs_count: self.studs_count,
            stud_linear_feet: round2(self.stud_linear_feet),
            top_plate_lf: round2(self.top_plate_lf),
            bottom_plate_lf: round2(self.bottom_plate_lf),
            sheathing_sqft: round2(self.sheathing_sqft),
            drywall_sqft: round2(self.drywall_sqft),
            insulation_sqft: round2(self.insulation_sqft),
            gravel_cubic_yards: round2(self.gravel_cubic_yards),
        }
    }

    /// Sheathing as 4x8 sheets (fractional)
    pub fn sheathing_sheets(&self) -> f64 {
        self.sheathing_sqft / SHEET_AREA_SQFT
    }

    /// Drywall as 4x8 sheets (fractional)
    pub fn drywall_sheets(&self) -> f64 {
        self.drywall_sqft / SHEET_AREA_SQFT
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Add for BillOfMaterials {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for BillOfMaterials {
    fn add_assign(&mut self, rhs: Self) {
        self.studs_count = self.studs_count.saturating_add(rhs.studs_count);
        self.stud_linear_feet += rhs.stud_linear_feet;
        self.top_plate_lf += rhs.top_plate_lf;
        self.bottom_plate_lf += rhs.bottom_plate_lf;
        self.sheathing_sqft += rhs.sheathing_sqft;
        self.drywall_sqft += rhs.drywall_sqft;
        self.insulation_sqft += rhs.insulation_sqft;
        self.gravel_cubic_yards += rhs.gravel_cubic_yards;
    }
}

impl Sum for BillOfMaterials {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BillOfMaterials::default(), Add::add)
    }
}

/// Materials for a single wall assembly.
pub fn wall_materials(wall: &Wall) -> BillOfMaterials {
    // Framing lumber
    let run: Inches = Feet(wall.length_feet).into();
    // float-to-int casts saturate; counts pin at u64::MAX for absurd runs
    let studs_vertical = ((run.value() / f64::from(wall.stud_spacing_inches())).floor() as u64).saturating_add(1);
    let studs_count = studs_vertical.saturating_add(PLATE_PIECES);

    // Footing gravel, exterior walls only
    let gravel: CuYd = if wall.is_exterior {
        CuFt(wall.length_feet * TRENCH_WIDTH_FT * TRENCH_DEPTH_FT).into()
    } else {
        CuYd(0.0)
    };

    BillOfMaterials {
        studs_count,
        stud_linear_feet: studs_count as f64 * wall.height_feet,
        top_plate_lf: wall.length_feet * 2.0,
        bottom_plate_lf: wall.length_feet,
        sheathing_sqft: wall.area_sqft(),
        drywall_sqft: wall.area_sqft(),
        insulation_sqft: wall.net_area_sqft(),
        gravel_cubic_yards: gravel.value(),
    }
}

/// Materials for a room: the sum over its walls.
pub fn room_materials(room: &Room) -> BillOfMaterials {
    let totals: BillOfMaterials = room.walls.iter().map(wall_materials).sum();
    debug!(
        "takeoff for {} ({} walls): {} studs",
        room.room_type,
        room.walls.len(),
        totals.studs_count
    );
    totals
}

/// Materials for a project: the sum over its rooms.
pub fn project_materials(project: &Project) -> BillOfMaterials {
    project.rooms.iter().map(room_materials).sum()
}

/// Bill of materials for a whole project (unrounded).
pub fn calculate_materials(project: &Project) -> BillOfMaterials {
    project_materials(project)
}
