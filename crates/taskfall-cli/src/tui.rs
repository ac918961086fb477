//! Minimal tick/render event loop for the TUI.
//!
//! The runtime multiplexes three event sources: an optional fixed-interval
//! tick (the gravity timer), dirty-triggered renders, and crossterm terminal
//! events. The tick interval can be re-armed or cancelled at any time from
//! the application callbacks, which is how the gravity scheduler contract is
//! implemented: armed on spawn, cancelled once the piece lands.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
};
use ratatui::Frame;

/// Trait for TUI applications executed by [`Runtime::run`].
pub trait App {
    /// Called once before the event loop starts.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: CrosstermEvent);

    /// Updates application logic (called on each tick).
    fn update(&mut self, runtime: &mut Runtime);

    /// Draws the screen (called on each render).
    fn draw(&self, frame: &mut Frame);
}

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
enum TuiEvent {
    /// Logic update timing (based on the tick interval).
    Tick,
    /// Screen render timing (after state changes).
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}

/// TUI application runtime.
#[derive(Debug)]
pub struct Runtime {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            // Initial render is required on startup
            dirty: true,
        }
    }

    /// Sets the tick interval. Pass `None` to disable tick events.
    ///
    /// Arming restarts the delay, so the first tick fires one full interval
    /// from now.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        if interval.is_some() {
            self.last_tick = Instant::now();
        }
        self.tick_interval = interval;
    }

    /// Runs the application until `app.should_exit()` returns true.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        crossterm::execute!(io::stdout(), EnableMouseCapture)?;
        let result = ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        });
        crossterm::execute!(io::stdout(), DisableMouseCapture)?;
        result
    }

    /// Returns the next event, blocking until a tick is due, a render is
    /// pending, or a terminal event arrives.
    fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.next_tick_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn next_tick_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        next_tick_at.map(|at| at.saturating_duration_since(now))
    }
}
