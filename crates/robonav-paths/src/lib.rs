//! Shortest-path search over grid models.
//!
//! - **A\*** shortest-path search ([`find_path`], generic [`astar`])
//! - **BFS** unit-cost distance maps ([`distance_map`])
//!
//! Every call owns its own frontier and node table, so one [`GridModel`]
//! can serve many searches at once, from any thread.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`GridModel`] implements all three: 4-connected, unit cost, Manhattan
//! heuristic.
//!
//! [`GridModel`]: robonav_core::GridModel

mod astar;
mod bfs;
mod distance;
mod path;
mod traits;

pub use astar::{astar, find_path, find_path_within};
pub use bfs::{DistanceMap, distance_map};
pub use distance::manhattan;
pub use path::{Outcome, Path, SearchBudget};
pub use traits::{AstarPather, Pather, WeightedPather};
