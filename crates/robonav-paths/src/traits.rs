use robonav_core::{GridModel, Point};

use crate::distance::manhattan;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before
    /// calling. Enumeration order must be deterministic: the search breaks
    /// ties by it.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` can be occupied at all. Searches refuse endpoints for
    /// which this is `false`.
    fn passable(&self, _p: Point) -> bool {
        true
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

// A grid model is a 4-connected, unit-cost graph: Manhattan distance is
// admissible and consistent for it.

impl Pather for GridModel {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_into(p, buf);
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_traversable(p)
    }
}

impl WeightedPather for GridModel {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for GridModel {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
