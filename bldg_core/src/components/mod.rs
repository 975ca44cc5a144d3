//! # Building Components
//!
//! The kit of parts a project is assembled from, leaf-first:
//!
//! ```text
//! MaterialLayer → Window → Wall → Room → Project
//! ```
//!
//! Every component is plain owned data with public fields, so it serializes
//! to clean JSON. Derived quantities (areas, R-values, stud spacing) are
//! accessor methods and never stored. Constructors (`new`) and `validate()`
//! enforce the dimensional invariants; the calculator and validator assume
//! they hold.
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::components::{FramingType, MaterialLayer, Room, RoomType, Wall, Window};
//!
//! let batt = MaterialLayer::new("Fiberglass Batt R-19", 5.5, 19.0)?;
//! let window = Window::new(36.0, 48.0, 0.28)?;
//!
//! let wall = Wall::new(12.0, 8.0, FramingType::Stud2x6At16, true)?
//!     .with_layer(batt)
//!     .with_window(window);
//!
//! let room = Room::new(RoomType::Bedroom, 8.0, vec![wall])?;
//! assert_eq!(room.all_windows().len(), 1);
//! # Ok::<(), bldg_core::errors::BldgError>(())
//! ```

pub mod framing;
pub mod layer;
pub mod room;
pub mod wall;
pub mod window;

pub use framing::{stud_spacing_for_label, FramingType, StudSize, DEFAULT_STUD_SPACING_IN};
pub use layer::MaterialLayer;
pub use room::{Room, RoomType};
pub use wall::{Wall, MAX_WALL_HEIGHT_FT, MIN_WALL_HEIGHT_FT};
pub use window::{Window, DEFAULT_WINDOW_TYPE, EGRESS_OPERABLE_FRACTION, MAX_U_FACTOR};
