use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use robonav_core::{GridModel, Point, Range};

use crate::path::{Outcome, Path, SearchBudget};
use crate::traits::AstarPather;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-search node table
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Unseen,
    Open,
    Closed,
}

#[derive(Clone, Copy)]
struct Node {
    g: i32,
    parent: usize,
    state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            state: NodeState::Unseen,
        }
    }
}

/// Frontier entry, ordered by `f` and then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Shortest path from `start` to `goal` on a grid model.
///
/// Runs to completion: the result is either an optimal [`Path`] or
/// [`Outcome::Unreachable`]. A start or goal that is a wall or lies outside
/// the model is unreachable.
pub fn find_path(model: &GridModel, start: Point, goal: Point) -> Outcome {
    find_path_within(model, start, goal, SearchBudget::Unlimited)
}

/// [`find_path`] with a cap on node expansions.
///
/// Returns [`Outcome::Exhausted`] if the cap is hit before the search
/// decides.
pub fn find_path_within(
    model: &GridModel,
    start: Point,
    goal: Point,
    budget: SearchBudget,
) -> Outcome {
    astar(model, model.bounds(), start, goal, budget)
}

/// Compute the shortest path from `from` to `to` using A*.
///
/// Only points inside `bounds` are considered. Frontier entries with equal
/// `f = g + h` are expanded in insertion order, so for a pather with a
/// deterministic neighbor order the result is reproducible.
///
/// The search succeeds when the goal is popped from the frontier, not when
/// it is first discovered.
pub fn astar<P: AstarPather>(
    pather: &P,
    bounds: Range,
    from: Point,
    to: Point,
    budget: SearchBudget,
) -> Outcome {
    let (Some(start_idx), Some(goal_idx)) = (bounds.index(from), bounds.index(to)) else {
        debug!("astar {from} -> {to}: endpoint outside {bounds}");
        return Outcome::Unreachable;
    };
    if !pather.passable(from) || !pather.passable(to) {
        debug!("astar {from} -> {to}: endpoint is blocked");
        return Outcome::Unreachable;
    }
    if start_idx == goal_idx {
        return Outcome::Found(Path::new(vec![from]));
    }

    let mut nodes = vec![Node::default(); bounds.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    nodes[start_idx] = Node {
        g: 0,
        parent: NO_PARENT,
        state: NodeState::Open,
    };
    open.push(NodeRef {
        idx: start_idx,
        f: pather.estimate(from, to),
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Skip entries superseded by a cheaper route or already expanded.
        if nodes[ci].state != NodeState::Open {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        if !budget.allows(expanded) {
            debug!("astar {from} -> {to}: budget exhausted after {expanded} expansions");
            return Outcome::Exhausted { expanded };
        }
        expanded += 1;

        nodes[ci].state = NodeState::Closed;
        let current_g = nodes[ci].g;
        let current_point = bounds.point(ci);
        trace!("expand {current_point} g={current_g} f={}", current.f);

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let tentative_g = current_g + pather.cost(current_point, np);

            let n = &mut nodes[ni];
            if n.state != NodeState::Unseen && tentative_g >= n.g {
                continue;
            }

            n.g = tentative_g;
            n.parent = ci;
            n.state = NodeState::Open;

            seq += 1;
            open.push(NodeRef {
                idx: ni,
                f: tentative_g + pather.estimate(np, to),
                seq,
            });
        }
    };

    if !found {
        debug!("astar {from} -> {to}: unreachable after {expanded} expansions");
        return Outcome::Unreachable;
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(bounds.point(ci));
        ci = nodes[ci].parent;
    }
    path.reverse();
    debug!(
        "astar {from} -> {to}: {} steps, {expanded} expansions",
        path.len() - 1
    );
    Outcome::Found(Path::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::distance_map;
    use crate::traits::{Pather, WeightedPather};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use robonav_core::{Marker, OccupancyMap};

    fn model(text: &str) -> GridModel {
        GridModel::build(&OccupancyMap::parse(text).unwrap()).unwrap()
    }

    fn solve(text: &str) -> Outcome {
        let m = model(text);
        find_path(&m, m.start(), m.goal())
    }

    fn assert_well_formed(path: &Path, start: Point, goal: Point, m: &GridModel) {
        assert_eq!(path.start(), start);
        assert_eq!(path.goal(), goal);
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} not adjacent", w[0], w[1]);
        }
        assert!(path.iter().all(|&p| m.is_traversable(p)));
    }

    #[test]
    fn open_3x3_takes_manhattan_steps() {
        let m = model("S..\n...\n..E");
        let path = find_path(&m, m.start(), m.goal()).into_path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.steps(), 4);
        assert_well_formed(&path, Point::new(0, 0), Point::new(2, 2), &m);
    }

    #[test]
    fn tie_break_follows_neighbor_order() {
        let path = solve("S..\n...\n..E").into_path().unwrap();
        assert_eq!(
            path.cells(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn walled_row_is_unreachable() {
        assert_eq!(solve("S..\n###\n..E"), Outcome::Unreachable);
    }

    #[test]
    fn single_row_blocked_then_open() {
        assert_eq!(solve("S.#.E"), Outcome::Unreachable);
        let path = solve("S...E").into_path().unwrap();
        let expected: Vec<Point> = (0..5).map(|x| Point::new(x, 0)).collect();
        assert_eq!(path.cells(), expected.as_slice());
    }

    #[test]
    fn detours_around_walls() {
        let m = model(
            "\
S.#...
..#.#.
....#E",
        );
        let path = find_path(&m, m.start(), m.goal()).into_path().unwrap();
        assert_well_formed(&path, m.start(), m.goal(), &m);
        assert_eq!(path.steps(), 11);
    }

    #[test]
    fn start_equals_goal() {
        let m = model("S.E");
        let p = Point::new(1, 0);
        let path = find_path(&m, p, p).into_path().unwrap();
        assert_eq!(path.cells(), &[p]);
    }

    #[test]
    fn wall_endpoints_are_unreachable() {
        let m = model("S#E\n...");
        let wall = Point::new(1, 0);
        assert_eq!(find_path(&m, wall, m.goal()), Outcome::Unreachable);
        assert_eq!(find_path(&m, m.start(), wall), Outcome::Unreachable);
        assert_eq!(find_path(&m, wall, wall), Outcome::Unreachable);
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let m = model("S.E");
        assert_eq!(
            find_path(&m, Point::new(-1, 0), m.goal()),
            Outcome::Unreachable
        );
        assert_eq!(
            find_path(&m, m.start(), Point::new(3, 0)),
            Outcome::Unreachable
        );
    }

    #[test]
    fn repeated_searches_are_identical() {
        let m = model(
            "\
S.....
.#.##.
......
.##.#.
.....E",
        );
        let a = find_path(&m, m.start(), m.goal());
        let b = find_path(&m, m.start(), m.goal());
        assert!(a.is_found());
        assert_eq!(a, b);
    }

    #[test]
    fn concurrent_searches_share_model() {
        let m = model("S....\n.###.\n....E");
        let expected = find_path(&m, m.start(), m.goal());
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| find_path(&m, m.start(), m.goal())))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn budget_too_small_is_exhausted() {
        let m = model("S.........E");
        assert_eq!(
            find_path_within(&m, m.start(), m.goal(), SearchBudget::Expansions(3)),
            Outcome::Exhausted { expanded: 3 }
        );
        let full = find_path_within(&m, m.start(), m.goal(), SearchBudget::Expansions(10));
        assert_eq!(full.path().map(|p| p.steps()), Some(10));
    }

    #[test]
    fn budget_does_not_mask_unreachable() {
        let m = model("S#E");
        assert_eq!(
            find_path_within(&m, m.start(), m.goal(), SearchBudget::Expansions(100)),
            Outcome::Unreachable
        );
    }

    // Open plane where vertical moves cost double.
    struct Corridor;

    impl Pather for Corridor {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(p.neighbors_4());
        }
    }

    impl WeightedPather for Corridor {
        fn cost(&self, from: Point, to: Point) -> i32 {
            if from.y != to.y { 2 } else { 1 }
        }
    }

    impl AstarPather for Corridor {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            crate::manhattan(from, to)
        }
    }

    #[test]
    fn generic_astar_uses_edge_costs() {
        let bounds = Range::with_size(4, 3);
        let path = astar(
            &Corridor,
            bounds,
            Point::new(0, 0),
            Point::new(3, 2),
            SearchBudget::Unlimited,
        )
        .into_path()
        .unwrap();
        assert_eq!(path.steps(), 5);
        let vertical = path.windows(2).filter(|w| w[0].y != w[1].y).count();
        assert_eq!(vertical, 2);
    }

    fn random_map(rng: &mut StdRng, w: i32, h: i32) -> OccupancyMap {
        let mut rows = vec![vec![Marker::Free; w as usize]; h as usize];
        for row in rows.iter_mut() {
            for cell in row.iter_mut() {
                if rng.random_bool(0.3) {
                    *cell = Marker::Wall;
                }
            }
        }
        let start = (rng.random_range(0..w) as usize, rng.random_range(0..h) as usize);
        let mut goal = start;
        while goal == start {
            goal = (rng.random_range(0..w) as usize, rng.random_range(0..h) as usize);
        }
        rows[start.1][start.0] = Marker::Start;
        rows[goal.1][goal.0] = Marker::Goal;
        OccupancyMap::from_rows(&rows).unwrap()
    }

    #[test]
    fn matches_bfs_on_random_maps() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut found = 0;
        for _ in 0..300 {
            let w = rng.random_range(2..9);
            let h = rng.random_range(1..9);
            let m = GridModel::build(&random_map(&mut rng, w, h)).unwrap();
            let dist = distance_map(&m, m.bounds(), m.start());
            match find_path(&m, m.start(), m.goal()) {
                Outcome::Found(path) => {
                    found += 1;
                    assert_well_formed(&path, m.start(), m.goal(), &m);
                    assert_eq!(Some(path.steps() as i32), dist.at(m.goal()));
                }
                Outcome::Unreachable => assert_eq!(dist.at(m.goal()), None),
                Outcome::Exhausted { .. } => unreachable!("unlimited budget"),
            }
        }
        // Make sure the sample exercises both outcomes.
        assert!(found > 50 && found < 300, "found {found}");
    }
}
