//! Maine Residence walkthrough: a bedroom that fails egress, gets a larger
//! window, and passes.

use anyhow::{Context, Result};
use log::info;

use bldg_core::components::{FramingType, MaterialLayer, Room, RoomType, Wall, Window};
use bldg_core::project::{ClimateZone, Project};
use bldg_core::{calculate, validate, BldgResult};

use crate::commands::{print_bom, print_findings, print_summary};

/// Index of the north wall, which carries the bedroom window
const NORTH_WALL: usize = 0;

fn exterior_assembly() -> BldgResult<Vec<MaterialLayer>> {
    Ok(vec![
        MaterialLayer::new("Vinyl Siding", 0.5, 0.6)?,
        MaterialLayer::new("OSB Sheathing", 0.5, 0.6)?,
        MaterialLayer::new("Fiberglass Batt R-19", 5.5, 19.0)?,
        MaterialLayer::new("Drywall", 0.5, 0.45)?,
    ])
}

/// Build the demo project with the given window on the north wall.
pub fn maine_residence(window: Window) -> BldgResult<Project> {
    let layers = exterior_assembly()?;
    let exterior = |length: f64| -> BldgResult<Wall> {
        Ok(Wall::new(length, 8.0, FramingType::Stud2x6At16, true)?.with_layers(layers.clone()))
    };

    let walls = vec![
        exterior(12.0)?.with_window(window), // north
        exterior(12.0)?,                     // south
        exterior(10.0)?,                     // east
        Wall::new(10.0, 8.0, FramingType::Stud2x6At16, false)?, // west, party wall
    ];
    let bedroom = Room::new(RoomType::Bedroom, 8.0, walls)?;

    Project::new("Maine Residence", "04101", ClimateZone::Zone6, vec![bedroom])
}

pub fn run() -> Result<()> {
    let small = Window::new(24.0, 24.0, 0.30)?;
    let mut project = maine_residence(small).context("failed to build demo project")?;

    println!("{} ({}, Climate Zone {})", project.name, project.location_zip, project.climate_zone);
    for (i, wall) in project.rooms[0].walls.iter().enumerate() {
        println!("  {}. {} R-{:.2}", i + 1, wall, wall.total_r_value());
    }
    println!();

    println!("Checking with a {}", project.rooms[0].walls[NORTH_WALL].windows[0]);
    print_findings(&validate(&project));
    println!();

    let egress = Window::new(36.0, 48.0, 0.28)?;
    info!("replacing north window with {egress}");
    println!("Replacing with a {egress}");
    project.rooms[0].walls[NORTH_WALL].windows = vec![egress];
    project.validate()?;

    let report = calculate(&project);
    print_findings(&report.compliance);
    println!();
    print_bom(&report.bom);
    println!();
    print_summary(&report.summary);
    Ok(())
}
