use std::collections::VecDeque;

use robonav_core::{Point, Range};

use crate::traits::Pather;

/// Sentinel for cells the breadth-first search never reached.
const UNREACHED: i32 = i32::MAX;

/// Step counts from a single source, produced by [`distance_map`].
#[derive(Debug, Clone)]
pub struct DistanceMap {
    bounds: Range,
    source: Point,
    dist: Vec<i32>,
    reached: usize,
}

impl DistanceMap {
    /// Number of steps from the source to `p`, or `None` if `p` was not
    /// reached or lies outside the map.
    pub fn at(&self, p: Point) -> Option<i32> {
        self.bounds
            .index(p)
            .map(|i| self.dist[i])
            .filter(|&d| d != UNREACHED)
    }

    /// Number of cells reached, source included.
    #[inline]
    pub fn reached(&self) -> usize {
        self.reached
    }

    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }
}

/// Compute a breadth-first distance map from `source`.
///
/// Each step has cost 1 regardless of [`WeightedPather::cost`]. A source
/// outside `bounds` or not passable reaches nothing.
///
/// [`WeightedPather::cost`]: crate::WeightedPather::cost
pub fn distance_map<P: Pather>(pather: &P, bounds: Range, source: Point) -> DistanceMap {
    let mut map = DistanceMap {
        bounds,
        source,
        dist: vec![UNREACHED; bounds.len()],
        reached: 0,
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    match bounds.index(source) {
        Some(si) if pather.passable(source) => {
            map.dist[si] = 0;
            map.reached = 1;
            queue.push_back(si);
        }
        _ => return map,
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let current_dist = map.dist[ci];
        let cp = bounds.point(ci);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if map.dist[ni] != UNREACHED {
                continue;
            }
            map.dist[ni] = current_dist + 1;
            map.reached += 1;
            queue.push_back(ni);
        }
    }

    map
}
