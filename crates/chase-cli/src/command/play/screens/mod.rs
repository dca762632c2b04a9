use chase_engine::GameSession;
use crossterm::event::Event;
use ratatui::Frame;

use self::{game::GameScreen, setup::SetupScreen};

mod game;
mod setup;

/// Screen switch requested by an event handler.
#[derive(Debug)]
pub enum Transition {
    Stay,
    ToGame,
    ToSetup,
}

/// The two screens of the interactive game.
///
/// Screens hold UI-local state only (cursor, text fields, modal); the
/// authoritative [`GameSession`] lives in the app and is passed in on every
/// event and draw.
#[derive(Debug)]
pub enum Screen {
    Setup(SetupScreen),
    Game(GameScreen),
}

impl Screen {
    pub fn new() -> Self {
        Screen::Setup(SetupScreen::new())
    }

    pub fn should_exit(&self) -> bool {
        match self {
            Screen::Setup(screen) => screen.should_exit(),
            Screen::Game(screen) => screen.should_exit(),
        }
    }

    pub fn handle_event(&mut self, session: &mut GameSession, event: &Event) {
        let transition = match self {
            Screen::Setup(screen) => screen.handle_event(session, event),
            Screen::Game(screen) => screen.handle_event(session, event),
        };
        match transition {
            Transition::Stay => {}
            Transition::ToGame => *self = Screen::Game(GameScreen::new()),
            Transition::ToSetup => *self = Screen::Setup(SetupScreen::new()),
        }
    }

    pub fn draw(&self, session: &GameSession, frame: &mut Frame<'_>) {
        match self {
            Screen::Setup(screen) => screen.draw(frame),
            Screen::Game(screen) => screen.draw(session, frame),
        }
    }
}
