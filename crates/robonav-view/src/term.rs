//! Crossterm terminal driver.
//!
//! [`CrosstermDriver`] implements [`Driver`]: it switches the terminal to
//! raw mode on an alternate screen, turns key presses and resizes into
//! [`Msg`]s, and paints [`Frame`]s cell by cell.

use std::error::Error;
use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use robonav_core::Point;

use crate::app::{Context, Driver};
use crate::messages::{Key, Msg};
use crate::screen::Frame;
use crate::style::Color;

/// Maps a [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Default => CtColor::Reset,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Terminal column and row for a screen position, if it fits the
/// terminal's coordinate range.
fn to_term_pos(p: Point) -> Option<(u16, u16)> {
    Some((u16::try_from(p.x).ok()?, u16::try_from(p.y).ok()?))
}

/// Translate one terminal event. Ctrl-C is a quit request, since raw mode
/// stops the terminal from turning it into a signal.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(Msg::KeyDown),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    poll_timeout: Duration,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(16),
        }
    }

}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(());
        }

        // Drain everything already queued.
        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            if let Some(m) = to_msg(event::read()?) {
                tx.send(m).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout().lock();

        for fc in &frame.cells {
            let Some((x, y)) = to_term_pos(fc.pos) else {
                continue;
            };
            let style = fc.cell.style;
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;
            if style.bold {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(fc.cell.ch))?;
            if style.bold {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
