//! Command implementations and text rendering.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use bldg_core::report::ProjectSummary;
use bldg_core::{calculate, calculate_materials, load_project, save_report, validate};
use bldg_core::{BillOfMaterials, Finding};

const RULE: &str = "═══════════════════════════════════════";

/// Full report: findings, rounded BOM and summary.
pub fn calculate_report(path: &Path, json: bool, output: Option<&Path>) -> Result<()> {
    let project = load(path)?;
    let report = calculate(&project);
    info!("generated report {}", report.report_id);

    if let Some(out) = output {
        save_report(&report, out)
            .with_context(|| format!("failed to save report to {}", out.display()))?;
        println!("Report written: {}", out.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_findings(&report.compliance);
        println!();
        print_bom(&report.bom);
        println!();
        print_summary(&report.summary);
    }
    Ok(())
}

/// Compliance findings only.
pub fn validate_project(path: &Path, json: bool) -> Result<()> {
    let project = load(path)?;
    let findings = validate(&project);

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        print_findings(&findings);
    }
    Ok(())
}

/// Bill of materials only.
pub fn bill_of_materials(path: &Path, json: bool) -> Result<()> {
    let project = load(path)?;
    let bom = calculate_materials(&project).rounded();

    if json {
        println!("{}", serde_json::to_string_pretty(&bom)?);
    } else {
        print_bom(&bom);
    }
    Ok(())
}

fn load(path: &Path) -> Result<bldg_core::Project> {
    load_project(path).with_context(|| format!("failed to load project {}", path.display()))
}

pub fn print_findings(findings: &[Finding]) {
    println!("{RULE}");
    println!("  CODE COMPLIANCE");
    println!("{RULE}");
    if findings.is_empty() {
        println!("  {} No violations found", status_icon(true));
        return;
    }
    for finding in findings {
        println!("  {} [{}] {}", status_icon(!finding.is_error()), finding.severity, finding.code);
        println!("      {}", finding.message);
        if let Some(component) = &finding.component {
            println!("      at: {component}");
        }
    }
}

pub fn print_bom(bom: &BillOfMaterials) {
    println!("{RULE}");
    println!("  BILL OF MATERIALS");
    println!("{RULE}");
    println!("Framing:");
    println!("  Studs:         {} pcs ({:.0} LF)", bom.studs_count, bom.stud_linear_feet);
    println!("  Top plate:     {:.0} LF", bom.top_plate_lf);
    println!("  Bottom plate:  {:.0} LF", bom.bottom_plate_lf);
    println!("Panels:");
    println!("  Sheathing:     {:.0} sq ft ({:.1} sheets)", bom.sheathing_sqft, bom.sheathing_sheets());
    println!("  Drywall:       {:.0} sq ft ({:.1} sheets)", bom.drywall_sqft, bom.drywall_sheets());
    println!("Thermal:");
    println!("  Insulation:    {:.0} sq ft", bom.insulation_sqft);
    println!("Foundation:");
    println!("  Gravel:        {:.2} cu yd", bom.gravel_cubic_yards);
}

pub fn print_summary(summary: &ProjectSummary) {
    println!("{RULE}");
    println!("  {} ({}, Climate Zone {})", summary.project_name, summary.location, summary.climate_zone);
    println!(
        "  {} rooms, {} walls, {} windows",
        summary.total_rooms, summary.total_walls, summary.total_windows
    );
    println!(
        "  RESULT: {} ({} violations)",
        summary.compliance_status, summary.violation_count
    );
    println!("{RULE}");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PROJECT_JSON: &str = r#"{
        "name": "Garage Studio",
        "location_zip": "97201",
        "climate_zone": 4,
        "rooms": [{
            "room_type": "Utility",
            "ceiling_height_feet": 6.5,
            "walls": [
                { "length_feet": 20.0, "height_feet": 8.0, "framing_type": "2x4 @ 24oc", "is_exterior": false }
            ]
        }]
    }"#;

    #[test]
    fn test_calculate_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("studio.json");
        let output = dir.path().join("studio.report.json");
        fs::write(&input, PROJECT_JSON).unwrap();

        calculate_report(&input, false, Some(&output)).unwrap();

        let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(report["summary"]["compliance_status"], "FAIL");
        assert_eq!(report["compliance"][0]["code"], "IRC R305.1");
        // 240" / 24" = 10, + 1, + 3 plates
        assert_eq!(report["bom"]["studs_count"], 14);
    }

    #[test]
    fn test_missing_project_reports_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = validate_project(&missing, true).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_bom_command_runs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("studio.json");
        fs::write(&input, PROJECT_JSON).unwrap();
        bill_of_materials(&input, true).unwrap();
    }
}
