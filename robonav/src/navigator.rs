//! The animation model: a robot stepping along a found path, one cell per
//! tick.

use log::debug;
use robonav_core::Point;
use robonav_paths::Path;
use robonav_view::{Cell, Effect, Key, Model, Msg, Screen, Style, tick_after};

use crate::config::Timing;
use crate::render::{Board, CELL_WIDTH, Palette};

/// Rows below the map used for the status line.
const STATUS_ROWS: i32 = 1;

/// Animation state: the robot's position along a planned path.
pub struct Navigator {
    board: Board,
    path: Path,
    cursor: usize,
    timing: Timing,
    palette: Palette,
    arrived: bool,
}

impl Navigator {
    /// `board` should already carry the path overlay.
    pub fn new(board: Board, path: Path, timing: Timing) -> Self {
        Self {
            board,
            path,
            cursor: 0,
            timing,
            palette: Palette::default(),
            arrived: false,
        }
    }

    /// Terminal columns and rows needed to show the map and status line.
    pub fn screen_size(&self) -> (i32, i32) {
        (
            self.board.width() * CELL_WIDTH,
            self.board.height() + STATUS_ROWS,
        )
    }

    /// Current robot position.
    pub fn robot(&self) -> Point {
        self.path[self.cursor]
    }

    /// Whether the robot has reached the goal.
    pub fn arrived(&self) -> bool {
        self.arrived
    }

    fn step(&mut self) -> Option<Effect> {
        if self.arrived {
            return Some(Effect::End);
        }
        if self.cursor + 1 < self.path.len() {
            self.cursor += 1;
        }
        debug!("robot at {} ({}/{})", self.robot(), self.cursor, self.path.steps());
        if self.cursor + 1 == self.path.len() {
            self.arrive()
        } else {
            Some(tick_after(self.timing.step))
        }
    }

    fn arrive(&mut self) -> Option<Effect> {
        self.arrived = true;
        debug!("robot arrived at {}", self.robot());
        Some(tick_after(self.timing.hold))
    }

    fn status(&self) -> String {
        if self.arrived {
            format!("Goal reached! {} steps", self.path.steps())
        } else {
            format!("step {}/{}  q: quit", self.cursor, self.path.steps())
        }
    }
}

impl Model for Navigator {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init if self.path.len() == 1 => self.arrive(),
            Msg::Init => Some(tick_after(self.timing.step)),
            Msg::Tick => self.step(),
            Msg::Quit => Some(Effect::End),
            Msg::KeyDown(Key::Escape | Key::Char('q')) => Some(Effect::End),
            _ => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Cell::default());
        self.board.draw(screen, Some(self.robot()), &self.palette);

        let style = Style::default().with_fg(self.palette.free).bold();
        let y = self.board.height();
        for (x, ch) in self.status().chars().enumerate() {
            let p = Point::new(x as i32, y);
            if !screen.contains(p) {
                break;
            }
            screen.set(p, Cell::new(ch, style));
        }
    }
}
