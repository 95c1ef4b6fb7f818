//! **robonav-view** — terminal presentation for robonav.
//!
//! Nothing here knows about paths or searches. The crate provides styled
//! screen [`Cell`]s, frame diffing, the Elm-style [`App`] loop that drives a
//! [`Model`], and a crossterm [`CrosstermDriver`].

pub mod app;
pub mod messages;
pub mod screen;
pub mod style;
pub mod term;

pub use app::{App, AppConfig, Context, Driver, Effect, Model, cmd, tick_after};
pub use messages::{Key, Msg};
pub use screen::{Cell, Frame, FrameCell, Screen, compute_frame};
pub use style::{Color, Style};
pub use term::CrosstermDriver;
