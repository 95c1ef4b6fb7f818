//! Construction-time errors for occupancy maps and grid models.

use crate::geom::Point;
use crate::map::Marker;

/// Why an occupancy map could not be turned into a grid model.
///
/// These are data errors: the caller has to fix the map, retrying with the
/// same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMapError {
    /// The map has no rows, or its rows have no cells.
    #[error("map is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("map row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A text map contains a character that is not a marker symbol.
    #[error("unknown map symbol {ch:?} at {pos}")]
    UnknownSymbol { ch: char, pos: Point },

    /// No cell carries a required marker.
    #[error("map has no {0} marker")]
    MissingMarker(Marker),

    /// A marker that must be unique appears more than once.
    #[error("map has more than one {marker} marker, at {first} and {second}")]
    DuplicateMarker {
        marker: Marker,
        first: Point,
        second: Point,
    },
}
