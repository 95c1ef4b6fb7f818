use std::ops::Deref;

use robonav_core::Point;

/// An ordered sequence of cells from start to goal, both inclusive.
///
/// Consecutive cells are adjacent under the pather's neighbor rule. A path
/// is read-only once produced; consumers that walk it keep their own cursor.
///
/// Paths only come out of a search, so they are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Point>);

impl Path {
    /// Wrap an already ordered, non-empty cell sequence.
    pub(crate) fn new(cells: Vec<Point>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    /// All cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.0
    }

    /// Number of moves, i.e. one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.0[0]
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.0[self.0.len() - 1]
    }
}

impl Deref for Path {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of a single search.
///
/// Not finding a path is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The goal was reached; the path is optimal.
    Found(Path),
    /// The frontier ran dry without reaching the goal, or start/goal is
    /// not traversable.
    Unreachable,
    /// The [`SearchBudget`] ran out before the search could decide.
    Exhausted { expanded: usize },
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only a found path.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Upper bound on the work a search may do.
///
/// The baseline contract is [`Unlimited`](SearchBudget::Unlimited): the
/// search always runs until it finds the goal or exhausts the frontier.
/// [`Expansions`](SearchBudget::Expansions) is an extension for callers that
/// need a hard cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchBudget {
    #[default]
    Unlimited,
    /// Give up after expanding this many nodes.
    Expansions(usize),
}

impl SearchBudget {
    #[inline]
    pub(crate) fn allows(self, expanded: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Expansions(n) => expanded < n,
        }
    }
}
