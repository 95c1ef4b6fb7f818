//! Turning a map, a path and the robot position into screen cells.
//!
//! Each map cell is drawn [`CELL_WIDTH`] terminal columns wide so squares
//! look roughly square.

use robonav_core::{Grid, Marker, OccupancyMap, Point};
use robonav_view::{Cell, Color, Screen, Style};

/// Terminal columns per map cell.
pub const CELL_WIDTH: i32 = 2;

/// Display state of one map cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Free,
    Wall,
    Start,
    Goal,
    /// Free cell on the planned route.
    Path,
    Robot,
}

impl CellState {
    /// Symbol used by the plain-text rendering.
    pub const fn symbol(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'E',
            Self::Path => '*',
            Self::Robot => 'R',
        }
    }

    /// Characters drawn on top of the cell colour.
    const fn glyph(self) -> [char; 2] {
        match self {
            Self::Start => ['S', ' '],
            Self::Goal => ['E', ' '],
            Self::Robot => ['[', ']'],
            _ => [' ', ' '],
        }
    }
}

impl From<Marker> for CellState {
    fn from(m: Marker) -> Self {
        match m {
            Marker::Free => Self::Free,
            Marker::Wall => Self::Wall,
            Marker::Start => Self::Start,
            Marker::Goal => Self::Goal,
        }
    }
}

/// Colours for each [`CellState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub free: Color,
    pub wall: Color,
    pub start: Color,
    pub goal: Color,
    pub path: Color,
    pub robot: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            free: Color::from_rgb(255, 255, 255),
            wall: Color::from_rgb(40, 40, 40),
            start: Color::from_rgb(0, 255, 0),
            goal: Color::from_rgb(255, 0, 0),
            path: Color::from_rgb(255, 254, 160),
            robot: Color::from_rgb(0, 150, 255),
            text: Color::from_rgb(20, 20, 20),
        }
    }
}

impl Palette {
    pub fn style(&self, state: CellState) -> Style {
        let bg = match state {
            CellState::Free => self.free,
            CellState::Wall => self.wall,
            CellState::Start => self.start,
            CellState::Goal => self.goal,
            CellState::Path => self.path,
            CellState::Robot => self.robot,
        };
        Style::default().with_bg(bg).with_fg(self.text)
    }
}

/// The static picture of the map: markers plus the path overlay. The robot
/// is layered on at draw time, so moving it never rewrites the board.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Grid<CellState>,
}

impl Board {
    pub fn new(map: &OccupancyMap) -> Self {
        let mut cells = Grid::new(map.width(), map.height(), CellState::Free);
        for (p, m) in map.iter() {
            cells.set(p, m.into());
        }
        Self { cells }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Mark `path` cells. Start and goal keep their own colours.
    pub fn overlay_path(&mut self, path: &[Point]) {
        for &p in path {
            if self.cells.at(p) == Some(CellState::Free) {
                self.cells.set(p, CellState::Path);
            }
        }
    }

    /// State of `p` with the robot standing on `robot`.
    pub fn state(&self, p: Point, robot: Option<Point>) -> Option<CellState> {
        let base = self.cells.at(p)?;
        Some(if robot == Some(p) { CellState::Robot } else { base })
    }

    /// Draw the board into the top-left of `screen`.
    pub fn draw(&self, screen: &mut Screen, robot: Option<Point>, palette: &Palette) {
        for p in self.cells.bounds() {
            let Some(state) = self.state(p, robot) else {
                continue;
            };
            let style = palette.style(state);
            for (dx, ch) in state.glyph().into_iter().enumerate() {
                screen.set(
                    Point::new(p.x * CELL_WIDTH + dx as i32, p.y),
                    Cell::new(ch, style),
                );
            }
        }
    }

    /// One line of symbols per row.
    pub fn to_text(&self, robot: Option<Point>) -> String {
        let mut out = String::with_capacity(((self.width() + 1) * self.height()) as usize);
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                let p = Point::new(x, y);
                out.push(self.state(p, robot).map_or(' ', CellState::symbol));
            }
        }
        out
    }
}
