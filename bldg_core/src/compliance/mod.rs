//! # Code Compliance
//!
//! Checks rooms against a fixed, illustrative subset of the IRC and IECC.
//! Each rule is a stateless function from a component to a list of
//! [`Finding`]s; an empty list means the component complies.
//!
//! ## Rules
//!
//! | Code          | Module       | Applies to                   |
//! |---------------|--------------|------------------------------|
//! | IRC R305.1    | [`ceiling`]  | every room                   |
//! | IRC R310.1    | [`egress`]   | bedrooms                     |
//! | IECC R402.1   | [`envelope`] | exterior walls of every room |
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::components::{FramingType, Room, RoomType, Wall};
//! use bldg_core::compliance::validate_project;
//! use bldg_core::project::{ClimateZone, Project};
//!
//! let wall = Wall::new(12.0, 8.0, FramingType::Stud2x6At16, false)?;
//! let bedroom = Room::new(RoomType::Bedroom, 8.0, vec![wall])?;
//! let project = Project::new("Cabin", "04101", ClimateZone::Zone6, vec![bedroom])?;
//!
//! let findings = validate_project(&project);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].code, "IRC R310.1");
//! assert_eq!(findings[0].component.as_deref(), Some("Room 1 (Bedroom) - Bedroom"));
//! # Ok::<(), bldg_core::errors::BldgError>(())
//! ```

pub mod ceiling;
pub mod egress;
pub mod envelope;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::{Room, RoomType};
use crate::project::Project;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Code violation
    Error,
    /// Advisory; no built-in rule emits this yet
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One code compliance finding.
///
/// ## JSON Example
///
/// ```json
/// {
///   "code": "IECC R402.1",
///   "severity": "ERROR",
///   "message": "Exterior wall R-value 13.0 below required 20 for Climate Zone 6",
///   "component": "Room 1 (Bedroom) - Wall #2 (2x4 @ 16oc)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Code reference, e.g. "IRC R310.1"
    pub code: String,
    pub severity: Severity,
    /// Human-readable description with the measured and required values
    pub message: String,
    /// Affected component, when the rule can name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl Finding {
    /// Create an ERROR finding.
    pub fn error(code: impl Into<String>, message: impl Into<String>, component: Option<String>) -> Self {
        Finding {
            code: code.into(),
            severity: Severity::Error,
            message: message.into(),
            component,
        }
    }

    /// Check whether this finding is a code violation (not advisory)
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Run every check for one room, in fixed order: ceiling height, bedroom
/// egress (bedrooms only), thermal envelope.
pub fn validate_room(room: &Room, project: &Project) -> Vec<Finding> {
    let mut findings = Vec::new();

    findings.extend(ceiling::check_ceiling_height(room));

    if room.room_type == RoomType::Bedroom {
        findings.extend(egress::check_bedroom_egress(room));
    }

    findings.extend(envelope::check_thermal_envelope(room, project.climate_zone));

    findings
}

/// Run every check for every room of a project.
///
/// Each finding's component is prefixed with its room, e.g.
/// `"Room 2 (Kitchen) - Wall #1 (2x4 @ 16oc)"`, or set to the room label
/// alone when the rule did not name a component. Rooms keep list order.
pub fn validate_project(project: &Project) -> Vec<Finding> {
    let mut all = Vec::new();

    for (idx, room) in project.rooms.iter().enumerate() {
        let room_label = format!("Room {} ({})", idx + 1, room.room_type);
        let findings = validate_room(room, project);
        debug!("{}: {} finding(s)", room_label, findings.len());

        all.extend(findings.into_iter().map(|f| scope_to_room(f, &room_label)));
    }

    all
}

fn scope_to_room(mut finding: Finding, room_label: &str) -> Finding {
    finding.component = Some(match finding.component.take() {
        Some(component) => format!("{} - {}", room_label, component),
        None => room_label.to_string(),
    });
    finding
}

/// All compliance findings for a project.
pub fn validate(project: &Project) -> Vec<Finding> {
    validate_project(project)
}
