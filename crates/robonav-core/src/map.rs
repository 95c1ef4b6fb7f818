//! Occupancy maps: [`Marker`] cells laid out in a rectangular [`OccupancyMap`].
//!
//! Text maps use one line per row:
//!
//! | symbol | marker |
//! |---|---|
//! | `.` or `0` | [`Marker::Free`] |
//! | `#` or `1` | [`Marker::Wall`] |
//! | `S` | [`Marker::Start`] |
//! | `E` or `G` | [`Marker::Goal`] |
//!
//! Blank lines before the first row and after the last row are ignored.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidMapError;
use crate::geom::{Point, Range};
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// Marker
// ---------------------------------------------------------------------------

/// What occupies a single map cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Marker {
    #[default]
    Free,
    Wall,
    Start,
    Goal,
}

impl Marker {
    /// Parse a text-map symbol.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Self::Free),
            '#' | '1' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' | 'G' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Canonical text-map symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'E',
        }
    }

    /// Walls block movement; every other marker is open ground.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Free => "free",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

// ---------------------------------------------------------------------------
// OccupancyMap
// ---------------------------------------------------------------------------

/// An immutable rectangular table of markers.
///
/// Shape is validated on construction (non-empty, every row the same
/// width). Marker counts are not: that is [`GridModel::build`]'s job, so a
/// map with a missing goal can still be loaded and displayed.
///
/// [`GridModel::build`]: crate::model::GridModel::build
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct OccupancyMap {
    cells: Grid<Marker>,
}

impl OccupancyMap {
    /// Build a map from rows of markers.
    pub fn from_rows<R: AsRef<[Marker]>>(rows: &[R]) -> Result<Self, InvalidMapError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(InvalidMapError::Empty);
        }
        for (row, r) in rows.iter().enumerate() {
            let found = r.as_ref().len();
            if found != expected {
                return Err(InvalidMapError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
        }
        let cells = Grid::from_fn(expected as i32, rows.len() as i32, |p| {
            rows[p.y as usize].as_ref()[p.x as usize]
        });
        Ok(Self { cells })
    }

    /// Parse a text map. See the module docs for the symbol table.
    pub fn parse(text: &str) -> Result<Self, InvalidMapError> {
        let text = text.trim_matches(|c| c == '\n' || c == '\r');
        let rows = text
            .lines()
            .enumerate()
            .map(|(y, line)| parse_row(line, y))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }

    /// Map extent.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.cells.bounds()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Marker at `p`, or `None` outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Marker> {
        self.cells.at(p)
    }

    /// Row-major iterator over `(Point, Marker)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Marker)> + '_ {
        self.cells.iter()
    }

    /// Every cell carrying `marker`, in row-major order.
    pub fn positions(&self, marker: Marker) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, m)| m == marker).map(|(p, _)| p)
    }

    /// The map rendered back to canonical text rows.
    pub fn rows(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .filter_map(|x| self.at(Point::new(x, y)))
                    .map(Marker::symbol)
                    .collect()
            })
            .collect()
    }
}

/// Parse one row of symbols; `y` is only used for error positions.
fn parse_row(line: &str, y: usize) -> Result<Vec<Marker>, InvalidMapError> {
    line.chars()
        .enumerate()
        .map(|(x, ch)| {
            Marker::from_symbol(ch).ok_or(InvalidMapError::UnknownSymbol {
                ch,
                pos: Point::new(x as i32, y as i32),
            })
        })
        .collect()
}

impl FromStr for OccupancyMap {
    type Err = InvalidMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OccupancyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for OccupancyMap {
    type Error = InvalidMapError;

    /// Each string is exactly one row. Unlike [`parse`](Self::parse),
    /// blank rows are kept, so they fail the shape check.
    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(y, row)| parse_row(row, y))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }
}

impl From<OccupancyMap> for Vec<String> {
    fn from(map: OccupancyMap) -> Self {
        map.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_size() {
        let map: OccupancyMap = "S.#\n..E".parse().unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.at(Point::new(0, 0)), Some(Marker::Start));
        assert_eq!(map.at(Point::new(2, 0)), Some(Marker::Wall));
        assert_eq!(map.at(Point::new(2, 1)), Some(Marker::Goal));
        assert_eq!(map.at(Point::new(3, 1)), None);
    }

    #[test]
    fn numeric_symbols_match_warehouse_encoding() {
        let a = OccupancyMap::parse("0S1\n0E0").unwrap();
        let b = OccupancyMap::parse(".S#\n.E.").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn surrounding_blank_lines_ignored() {
        let map = OccupancyMap::parse("\n\nS.E\n\n").unwrap();
        assert_eq!(map.height(), 1);
    }

    #[test]
    fn crlf_line_endings() {
        let map = OccupancyMap::parse("S.\r\n.E\r\n").unwrap();
        assert_eq!(map.rows(), vec!["S.", ".E"]);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = OccupancyMap::parse("S..\n.E").unwrap_err();
        assert_eq!(
            err,
            InvalidMapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(OccupancyMap::parse("").unwrap_err(), InvalidMapError::Empty);
        let rows: Vec<Vec<Marker>> = vec![vec![]];
        assert_eq!(
            OccupancyMap::from_rows(&rows).unwrap_err(),
            InvalidMapError::Empty
        );
    }

    #[test]
    fn unknown_symbol_reports_position() {
        let err = OccupancyMap::parse("S..\n.x.").unwrap_err();
        assert_eq!(
            err,
            InvalidMapError::UnknownSymbol {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    fn row_strings(r: &[&str]) -> Vec<String> {
        r.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn row_strings_map_one_to_one() {
        let map = OccupancyMap::try_from(row_strings(&["S.#", "..E"])).unwrap();
        assert_eq!(map.rows(), vec!["S.#", "..E"]);

        assert_eq!(
            OccupancyMap::try_from(row_strings(&["S.E", ""])).unwrap_err(),
            InvalidMapError::Ragged {
                row: 1,
                expected: 3,
                found: 0
            }
        );
        assert_eq!(
            OccupancyMap::try_from(row_strings(&["", "S.E", ""])).unwrap_err(),
            InvalidMapError::Empty
        );
        assert_eq!(
            OccupancyMap::try_from(row_strings(&["S.\n.E"])).unwrap_err(),
            InvalidMapError::UnknownSymbol {
                ch: '\n',
                pos: Point::new(2, 0)
            }
        );
        assert_eq!(
            OccupancyMap::try_from(Vec::new()).unwrap_err(),
            InvalidMapError::Empty
        );
    }

    #[test]
    fn positions_in_row_major_order() {
        let map = OccupancyMap::parse("#.#\n.#.").unwrap();
        let walls: Vec<_> = map.positions(Marker::Wall).collect();
        assert_eq!(
            walls,
            vec![Point::new(0, 0), Point::new(2, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn display_uses_canonical_symbols() {
        let map = OccupancyMap::parse("0S1\n0G0").unwrap();
        assert_eq!(map.to_string(), ".S#\n.E.");
    }

    #[test]
    fn marker_traversability() {
        assert!(Marker::Free.is_traversable());
        assert!(Marker::Start.is_traversable());
        assert!(Marker::Goal.is_traversable());
        assert!(!Marker::Wall.is_traversable());
    }
}
