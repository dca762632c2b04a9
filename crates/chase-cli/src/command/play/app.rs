use chase_engine::GameSession;
use crossterm::event::Event;
use ratatui::Frame;

use crate::{command::play::screens::Screen, summary::GameSummary, tui::App};

/// The interactive game: one authoritative session, driven by two screens.
#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    screen: Screen,
}

impl PlayApp {
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            screen: Screen::new(),
        }
    }

    /// Final standings, if the last game was played to the end of the board.
    pub fn into_summary(self) -> Option<GameSummary> {
        if !self.session.phase().is_finished() {
            return None;
        }
        self.session.match_state().map(GameSummary::from_match)
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: Event) {
        self.screen.handle_event(&mut self.session, &event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(&self.session, frame);
    }
}
