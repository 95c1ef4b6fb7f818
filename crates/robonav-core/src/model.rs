//! The [`GridModel`]: a read-only walkability graph derived from an
//! [`OccupancyMap`].

use log::debug;

use crate::error::InvalidMapError;
use crate::geom::{Point, Range};
use crate::grid::Grid;
use crate::map::{Marker, OccupancyMap};

/// Traversability lookup plus the cached start and goal cells of a map.
///
/// Built once and never mutated, so a single model can back any number of
/// searches, including concurrent ones on other threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    walkable: Grid<bool>,
    start: Point,
    goal: Point,
}

impl GridModel {
    /// Validate marker counts and derive the traversability table.
    ///
    /// Fails if the map does not carry exactly one start and exactly one
    /// goal marker.
    pub fn build(map: &OccupancyMap) -> Result<Self, InvalidMapError> {
        let start = unique(map, Marker::Start)?;
        let goal = unique(map, Marker::Goal)?;
        let walkable = Grid::from_fn(map.width(), map.height(), |p| {
            map.at(p).is_some_and(Marker::is_traversable)
        });
        debug!(
            "grid model {}x{}: start {start}, goal {goal}",
            map.width(),
            map.height()
        );
        Ok(Self {
            walkable,
            start,
            goal,
        })
    }

    /// Shape-check raw rows, then [`build`](Self::build).
    pub fn from_rows<R: AsRef<[Marker]>>(rows: &[R]) -> Result<Self, InvalidMapError> {
        Self::build(&OccupancyMap::from_rows(rows)?)
    }

    /// Model extent.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.walkable.bounds()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.walkable.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.walkable.height()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The unique cell bearing `marker`. Only [`Marker::Start`] and
    /// [`Marker::Goal`] are unique; other markers yield `None`.
    pub fn locate(&self, marker: Marker) -> Option<Point> {
        match marker {
            Marker::Start => Some(self.start),
            Marker::Goal => Some(self.goal),
            Marker::Free | Marker::Wall => None,
        }
    }

    /// False for walls and for anything outside the map.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.walkable.at(p).unwrap_or(false)
    }

    /// Append the traversable 4-neighbours of `p` to `buf`, in the order
    /// up, right, down, left.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.is_traversable(n)),
        );
    }

    /// The traversable 4-neighbours of `p`, in the order up, right, down,
    /// left.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }
}

fn unique(map: &OccupancyMap, marker: Marker) -> Result<Point, InvalidMapError> {
    let mut found = map.positions(marker);
    let first = found.next().ok_or(InvalidMapError::MissingMarker(marker))?;
    match found.next() {
        Some(second) => Err(InvalidMapError::DuplicateMarker {
            marker,
            first,
            second,
        }),
        None => Ok(first),
    }
}
