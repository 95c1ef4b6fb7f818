//! Screen contents: styled [`Cell`]s in a [`Screen`] grid, and the
//! [`Frame`] diff sent to drivers.

use robonav_core::{Grid, Point};

use crate::style::Style;

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// A cell showing `ch` in `style`.
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

/// What the model draws into: one [`Cell`] per terminal column and row.
pub type Screen = Grid<Cell>;

/// A blank screen of the given size.
pub fn blank(width: i32, height: i32) -> Screen {
    Grid::new(width, height, Cell::default())
}

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two same-sized screens.
///
/// Returns a [`Frame`] containing only the cells of `curr` that differ
/// from `prev`.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let cells = curr
        .iter()
        .filter(|&(p, c)| prev.at(p) != Some(c))
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame {
        cells,
        width: curr.width(),
        height: curr.height(),
    }
}
