//! The [`Grid`] type — a dense, owned 2D table of values.
//!
//! Unlike a shared view, cloning a `Grid` copies its storage, so a grid
//! handed to another thread or to the renderer can never be mutated behind
//! the owner's back.

use crate::geom::{Point, Range};

/// A row-major 2D grid of `T` covering `[(0, 0), (width, height))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Range,
}

impl<T: Copy> Grid<T> {
    /// Create a grid of the given dimensions filled with `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            cells: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// Build a grid by evaluating `f` at every point, in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            bounds,
        }
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the value at `p`, or `None` if `p` is outside bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the value at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = value;
        }
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Copy every value from `src` where both grids overlap.
    pub fn copy_from(&mut self, src: &Grid<T>) {
        for (p, v) in src.iter() {
            self.set(p, v);
        }
    }

    /// Row-major iterator over `(Point, T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}
