//! # bldg_core - Residential Building Component Engine
//!
//! `bldg_core` models a house as a tree of components (material layers,
//! windows, walls, rooms, projects) and derives two things from it: a bill
//! of materials for framing, sheathing, drywall, insulation and foundation
//! gravel, and a list of residential code findings. All inputs and outputs
//! are JSON-serializable so a host can drive it over any JSON transport.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an immutable component tree
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types with field paths, not just strings
//! - **Validated Trees**: Constructors and `validate()` reject geometry no
//!   calculation could make sense of
//!
//! ## Quick Start
//!
//! ```rust
//! use bldg_core::components::{FramingType, Room, RoomType, Wall, Window};
//! use bldg_core::project::{ClimateZone, Project};
//!
//! let wall = Wall::new(12.0, 8.0, FramingType::Stud2x6At16, false)?
//!     .with_window(Window::new(24.0, 24.0, 0.30)?);
//! let room = Room::new(RoomType::Bedroom, 8.0, vec![wall])?;
//! let project = Project::new("Maine Residence", "04101", ClimateZone::Zone6, vec![room])?;
//!
//! // 24" x 24" is too small for bedroom egress
//! let findings = bldg_core::validate(&project);
//! assert_eq!(findings[0].code, "IRC R310.1");
//!
//! let bom = bldg_core::calculate_materials(&project);
//! assert_eq!(bom.studs_count, 13);
//! # Ok::<(), bldg_core::BldgError>(())
//! ```
//!
//! ## Modules
//!
//! - [`components`] - Layers, windows, walls and rooms
//! - [`project`] - Project root and climate zones
//! - [`calculations`] - Material takeoff
//! - [`compliance`] - IRC/IECC code checks
//! - [`report`] - Combined calculation report
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Project loading and atomic report saves

pub mod calculations;
pub mod components;
pub mod compliance;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_materials, BillOfMaterials};
pub use compliance::{validate, Finding, Severity};
pub use errors::{BldgError, BldgResult};
pub use file_io::{load_project, save_report};
pub use project::{ClimateZone, Project};
pub use report::{calculate, CalculationReport};
