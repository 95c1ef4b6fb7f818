//! **robonav-core** — occupancy maps and the grid model searched by robonav.
//!
//! This crate turns an externally supplied table of [`Marker`]s into a
//! [`GridModel`]: a read-only walkability graph with 4-connected
//! neighbours and cached start/goal cells. It has no search logic and no
//! rendering; see `robonav-paths` for A*.

pub mod error;
pub mod geom;
pub mod grid;
pub mod map;
pub mod model;

pub use error::InvalidMapError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use map::{Marker, OccupancyMap};
pub use model::GridModel;
