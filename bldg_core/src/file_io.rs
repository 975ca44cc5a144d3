//! # File I/O Module
//!
//! Reads project descriptions and writes calculation reports:
//! - **Validated loads**: a project file is parsed and its whole component
//!   tree validated before anything is computed from it
//! - **Atomic saves**: reports are staged next to the target, synced, then
//!   renamed into place; a failed save leaves no staging file behind
//!
//! ## Example
//!
//! ```rust,no_run
//! use bldg_core::file_io::{load_project, save_report};
//! use bldg_core::report::calculate;
//! use std::path::Path;
//!
//! let project = load_project(Path::new("house.json"))?;
//! let report = calculate(&project);
//! save_report(&report, Path::new("house.report.json"))?;
//! # Ok::<(), bldg_core::errors::BldgError>(())
//! ```

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};

use crate::errors::{BldgError, BldgResult};
use crate::project::Project;
use crate::report::CalculationReport;

/// Load and validate a project from a JSON file.
///
/// # Returns
///
/// * `Ok(Project)` - Parsed project whose invariants all hold
/// * `Err(BldgError::FileError)` - I/O error
/// * `Err(BldgError::SerializationError)` - Invalid JSON or unknown labels
/// * `Err(BldgError::InvalidInput | MissingField)` - Tree fails validation
pub fn load_project(path: &Path) -> BldgResult<Project> {
    let contents = fs::read_to_string(path).map_err(|e| {
        BldgError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| BldgError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;
    project.validate()?;

    info!(
        "loaded project '{}' from {} ({} rooms, {} walls)",
        project.name,
        path.display(),
        project.rooms.len(),
        project.total_walls()
    );
    Ok(project)
}

/// Save a report as pretty JSON, replacing `path` atomically.
///
/// The report is staged beside `path` with a `.json.tmp` extension, fsynced,
/// then renamed over the target. On any failure the staging file is removed and the previous
/// report, if any, is left untouched.
pub fn save_report(report: &CalculationReport, path: &Path) -> BldgResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    let staging = path.with_extension("json.tmp");

    if let Err(e) = write_synced(&staging, json.as_bytes()) {
        discard(&staging);
        return Err(BldgError::file_error("stage report", staging.display().to_string(), e.to_string()));
    }
    if let Err(e) = fs::rename(&staging, path) {
        discard(&staging);
        return Err(BldgError::file_error("replace report", path.display().to_string(), e.to_string()));
    }

    info!("wrote report {} to {}", report.report_id, path.display());
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn discard(staging: &Path) {
    if let Err(e) = fs::remove_file(staging) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("could not remove {}: {}", staging.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::calculate;
    use tempfile::tempdir;

    const PROJECT_JSON: &str = r#"{
        "name": "Maine Residence",
        "location_zip": "04101",
        "climate_zone": 6,
        "rooms": [{
            "room_type": "Bedroom",
            "ceiling_height_feet": 8.0,
            "walls": [
                {
                    "length_feet": 12.0,
                    "height_feet": 8.0,
                    "framing_type": "2x6 @ 16oc",
                    "is_exterior": true,
                    "layers": [
                        { "name": "Fiberglass Batt R-21", "thickness_inches": 5.5, "r_value": 21.0 }
                    ],
                    "windows": [ { "width_inches": 36, "height_inches": 48, "u_factor": 0.28 } ]
                },
                {
                    "length_feet": 10.0,
                    "height_feet": 8.0,
                    "framing_type": "2x4 @ 16oc",
                    "is_exterior": false
                }
            ]
        }]
    }"#;

    #[test]
    fn test_load_project() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("house.json");
        fs::write(&path, PROJECT_JSON).unwrap();

        let project = load_project(&path).unwrap();
        assert_eq!(project.name, "Maine Residence");
        assert_eq!(project.total_walls(), 2);
        assert_eq!(project.rooms[0].walls[0].windows[0].window_type, "Double-Hung");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_project(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_project(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_rejects_invalid_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.json");
        fs::write(&path, PROJECT_JSON.replace("\"height_feet\": 8.0", "\"height_feet\": 5.0")).unwrap();

        match load_project(&path).unwrap_err() {
            BldgError::InvalidInput { field, .. } => assert_eq!(field, "rooms[0].walls[0].height_feet"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_save_report_roundtrip() {
        let dir = tempdir().unwrap();
        let project_path = dir.path().join("house.json");
        fs::write(&project_path, PROJECT_JSON).unwrap();
        let report = calculate(&load_project(&project_path).unwrap());

        let report_path = dir.path().join("house.report.json");
        save_report(&report, &report_path).unwrap();

        assert!(!report_path.with_extension("json.tmp").exists());
        let saved: CalculationReport =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(saved, report);
    }

    #[test]
    fn test_failed_replace_removes_staging_file() {
        let dir = tempdir().unwrap();
        let project_path = dir.path().join("house.json");
        fs::write(&project_path, PROJECT_JSON).unwrap();
        let report = calculate(&load_project(&project_path).unwrap());

        // a non-empty directory cannot be replaced by a file
        let target = dir.path().join("house.report.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "x").unwrap();

        let err = save_report(&report, &target).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!target.with_extension("json.tmp").exists());
        assert!(target.join("keep.txt").exists());
    }

    #[test]
    fn test_failed_stage_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let project_path = dir.path().join("house.json");
        fs::write(&project_path, PROJECT_JSON).unwrap();
        let report = calculate(&load_project(&project_path).unwrap());

        let target = dir.path().join("missing-dir").join("house.report.json");
        match save_report(&report, &target).unwrap_err() {
            BldgError::FileError { operation, .. } => assert_eq!(operation, "stage report"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!target.with_extension("json.tmp").exists());
    }
}
