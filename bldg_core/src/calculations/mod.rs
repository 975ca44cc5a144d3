//! # Quantity Calculations
//!
//! Geometry-driven estimating. Each calculation follows the pattern:
//!
//! - input: a validated component (`Wall`, `Room`, `Project`)
//! - output: a JSON-serializable result record
//! - pure function, no code-compliance awareness
//!
//! ## Available Calculations
//!
//! - [`takeoff`] - Bill of materials (framing lumber, panels, insulation, footing gravel)

pub mod takeoff;

pub use takeoff::{
    calculate_materials, project_materials, room_materials, wall_materials, BillOfMaterials,
};
