use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;
use taskfall_engine::GameSession;

use crate::{
    command::play::screens::GameScreen,
    tui::{App, Runtime},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: GameScreen,
}

impl PlayApp {
    pub fn new(session: GameSession, gravity: Duration) -> Self {
        Self {
            screen: GameScreen::new(session, gravity),
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, _runtime: &mut Runtime) {
        // no tick until the first piece spawns; the screen arms it
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        self.screen.handle_event(runtime, &event);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.screen.update(runtime);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
