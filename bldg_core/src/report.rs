//! # Calculation Report
//!
//! Bundles the compliance findings, the display-rounded bill of materials
//! and a one-glance project summary into a single JSON document, which is
//! what a host hands back for a "calculate everything" request.
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::components::{FramingType, Room, RoomType, Wall, Window};
//! use bldg_core::project::{ClimateZone, Project};
//! use bldg_core::report::{calculate, ComplianceStatus};
//!
//! let wall = Wall::new(12.0, 8.0, FramingType::Stud2x4At16, false)?
//!     .with_window(Window::new(36.0, 48.0, 0.28)?);
//! let room = Room::new(RoomType::Bedroom, 8.0, vec![wall])?;
//! let project = Project::new("Infill", "97201", ClimateZone::Zone4, vec![room])?;
//!
//! let report = calculate(&project);
//! assert_eq!(report.summary.compliance_status, ComplianceStatus::Pass);
//! assert_eq!(report.bom.studs_count, 13);
//! # Ok::<(), bldg_core::errors::BldgError>(())
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{calculate_materials, BillOfMaterials};
use crate::compliance::{validate, Finding};
use crate::project::{ClimateZone, Project};

/// Current schema version of report documents
pub const REPORT_SCHEMA_VERSION: &str = "0.1.0";

/// Overall compliance outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceStatus {
    Pass,
    Fail,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Pass => f.write_str("PASS"),
            ComplianceStatus::Fail => f.write_str("FAIL"),
        }
    }
}

/// High-level counts for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_name: String,
    pub location: String,
    pub climate_zone: ClimateZone,
    pub total_rooms: usize,
    pub total_walls: usize,
    pub total_windows: usize,
    /// PASS when there are no findings at all
    pub compliance_status: ComplianceStatus,
    pub violation_count: usize,
}

impl ProjectSummary {
    /// Summarize a project given its findings.
    pub fn new(project: &Project, findings: &[Finding]) -> Self {
        ProjectSummary {
            project_name: project.name.clone(),
            location: project.location_zip.clone(),
            climate_zone: project.climate_zone,
            total_rooms: project.rooms.len(),
            total_walls: project.total_walls(),
            total_windows: project.total_windows(),
            compliance_status: if findings.is_empty() {
                ComplianceStatus::Pass
            } else {
                ComplianceStatus::Fail
            },
            violation_count: findings.len(),
        }
    }
}

/// Complete calculation output for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Report schema version
    pub version: String,

    /// Unique id for this report
    pub report_id: Uuid,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Code compliance findings (empty = compliant)
    pub compliance: Vec<Finding>,

    /// Bill of materials, rounded to 2 decimals
    pub bom: BillOfMaterials,

    pub summary: ProjectSummary,
}

impl CalculationReport {
    /// Check if the project passed every compliance check
    pub fn passes(&self) -> bool {
        self.summary.compliance_status == ComplianceStatus::Pass
    }
}

/// Run compliance checks and the material takeoff and assemble a report.
pub fn calculate(project: &Project) -> CalculationReport {
    let compliance = validate(project);
    let bom = calculate_materials(project).rounded();
    let summary = ProjectSummary::new(project, &compliance);

    CalculationReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        compliance,
        bom,
        summary,
    }
}
