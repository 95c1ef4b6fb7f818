//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use log::debug;

use crate::messages::Msg;
use crate::screen::{self, Screen, compute_frame};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
pub enum Effect {
    /// A one-shot command that produces an optional follow-up message.
    ///
    /// Commands run after the current frame has been flushed, so a command
    /// that sleeps delays the *next* update, not the display of this one.
    Cmd(Box<dyn FnOnce() -> Option<Msg> + Send>),
    /// Multiple effects batched together.
    Batch(Vec<Effect>),
    /// Signal the application loop to stop.
    End,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmd(_) => f.write_str("Effect::Cmd(..)"),
            Self::Batch(v) => f.debug_tuple("Effect::Batch").field(&v.len()).finish(),
            Self::End => f.write_str("Effect::End"),
        }
    }
}

/// Convenience constructor for an [`Effect::Cmd`].
pub fn cmd<F>(f: F) -> Effect
where
    F: FnOnce() -> Option<Msg> + Send + 'static,
{
    Effect::Cmd(Box::new(f))
}

/// A command that sleeps for `delay` and then delivers [`Msg::Tick`].
pub fn tick_after(delay: std::time::Duration) -> Effect {
    cmd(move || {
        std::thread::sleep(delay);
        Some(Msg::Tick)
    })
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Poll for input messages, sending them through `tx`.
    /// Should return promptly, and at once when `ctx.is_done()`.
    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: screen::Frame) -> Result<(), Box<dyn Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
}

type Command = Box<dyn FnOnce() -> Option<Msg> + Send>;

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
        }
    }

    /// The model, e.g. to inspect its final state after [`run`](Self::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the main Model-View-Update loop.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends `Msg::Init` through the model.
    /// 3. Enters the event loop: poll → update → draw → diff → flush →
    ///    run commands.
    /// 4. Stops when the model returns `Effect::End`.
    ///
    /// The driver is closed on every exit path, including errors.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init()?;
        let res = self.event_loop();
        self.driver.close();
        res
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();

        // Seed with Init.
        tx.send(Msg::Init).ok();

        let mut prev = screen::blank(self.width, self.height);
        let mut curr = screen::blank(self.width, self.height);

        self.process_pending(&rx, &ctx, &tx, &mut prev, &mut curr)?;

        while !ctx.is_done() {
            self.driver.poll_msgs(&ctx, &tx)?;
            if ctx.is_done() {
                break;
            }
            self.process_pending(&rx, &ctx, &tx, &mut prev, &mut curr)?;
        }
        debug!("app loop finished");
        Ok(())
    }

    /// Drain queued messages, update the model, draw, diff, flush, then run
    /// the commands the updates asked for.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        tx: &Sender<Msg>,
        prev: &mut Screen,
        curr: &mut Screen,
    ) -> Result<(), Box<dyn Error>> {
        let mut needs_draw = false;
        let mut commands: Vec<Command> = Vec::new();

        // Drain all currently available messages.
        while let Ok(msg) = rx.try_recv() {
            if let Some(effect) = self.model.update(msg) {
                if collect_effect(effect, &mut commands) {
                    ctx.cancel();
                    return Ok(());
                }
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(curr);
            let frame = compute_frame(prev, curr);
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            prev.copy_from(curr);
        }

        for c in commands {
            if let Some(msg) = c() {
                tx.send(msg).ok();
            }
        }
        Ok(())
    }
}

/// Queue the commands in `effect`. Returns `true` if the app should stop.
fn collect_effect(effect: Effect, commands: &mut Vec<Command>) -> bool {
    match effect {
        Effect::End => true,
        Effect::Cmd(f) => {
            commands.push(f);
            false
        }
        Effect::Batch(effects) => effects.into_iter().any(|e| collect_effect(e, commands)),
    }
}
