use chase_engine::{CellIndex, GameSession, Guess, MatchState, validate_guess};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph},
};

use crate::{
    command::play::screens::Transition,
    ui::widgets::{self, BoardDisplay, ScoreboardDisplay},
};

const SIDE_PANEL_WIDTH: u16 = 28;

/// The board screen: cursor navigation, the guess dialog, and the
/// end-of-game overlay.
#[derive(Debug)]
pub struct GameScreen {
    cursor: CellIndex,
    guess: Option<GuessPrompt>,
    exiting: bool,
}

/// Modal state while a guess is pending on a selected cell.
#[derive(Debug)]
struct GuessPrompt {
    target: CellIndex,
    input: String,
    rejected: bool,
}

impl GuessPrompt {
    fn new(target: CellIndex) -> Self {
        Self {
            target,
            input: String::new(),
            rejected: false,
        }
    }
}

impl GameScreen {
    pub fn new() -> Self {
        Self {
            cursor: CellIndex::FIRST,
            guess: None,
            exiting: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exiting
    }

    pub fn handle_event(&mut self, session: &mut GameSession, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::Stay;
        };

        if session.phase().is_finished() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.exiting = true,
                KeyCode::Char('r') => {
                    session.restart();
                    return Transition::ToSetup;
                }
                _ => {}
            }
            return Transition::Stay;
        }

        if self.guess.is_some() {
            self.handle_guess_key(session, key.code);
            return Transition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exiting = true,
            KeyCode::Char('r') => {
                session.restart();
                return Transition::ToSetup;
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Occupied cells are simply not selectable.
                if session.select_cell(self.cursor).is_ok() {
                    self.guess = Some(GuessPrompt::new(self.cursor));
                }
            }
            _ => {}
        }
        Transition::Stay
    }

    fn handle_guess_key(&mut self, session: &mut GameSession, code: KeyCode) {
        match code {
            KeyCode::Esc => self.guess = None,
            KeyCode::Enter => {
                let Some(prompt) = &mut self.guess else { return };
                // Anything that fails to parse counts as a wrong guess.
                let guess = prompt
                    .input
                    .trim()
                    .parse::<u8>()
                    .map_or(Guess::Incorrect, |value| validate_guess(prompt.target, value));
                if guess.is_incorrect() {
                    prompt.rejected = true;
                    return;
                }
                let target = prompt.target;
                if let Some(player) = session.match_state().map(|s| s.current_player().id()) {
                    _ = session.commit_move(target, player);
                }
                self.guess = None;
            }
            KeyCode::Backspace => {
                if let Some(prompt) = &mut self.guess {
                    prompt.input.pop();
                    prompt.rejected = false;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(prompt) = &mut self.guess
                    && prompt.input.len() < 3
                {
                    prompt.input.push(c);
                    prompt.rejected = false;
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let row = self.cursor.row().checked_add_signed(dr);
        let col = self.cursor.col().checked_add_signed(dc);
        if let (Some(row), Some(col)) = (row, col)
            && let Some(cursor) = CellIndex::from_row_col(row, col)
        {
            self.cursor = cursor;
        }
    }

    pub fn draw(&self, session: &GameSession, frame: &mut Frame<'_>) {
        let Some(state) = session.match_state() else {
            return;
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(BoardDisplay::height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        let [side_area, board_area] = Layout::horizontal([
            Constraint::Length(SIDE_PANEL_WIDTH),
            Constraint::Length(BoardDisplay::width()),
        ])
        .areas::<2>(main_area);

        let scoreboard = ScoreboardDisplay::new(state, session.phase())
            .block(Block::bordered().title(" Scoreboard "));
        frame.render_widget(scoreboard, side_area);

        let mut board = BoardDisplay::new(state.board(), state.players())
            .block(Block::bordered().title(" Hundred Chart "));
        if !session.phase().is_finished() {
            board = board.cursor(self.cursor);
        }
        frame.render_widget(board, board_area);

        let help_text = if session.phase().is_finished() {
            "Controls: R (Play Again) | Q (Quit)"
        } else if self.guess.is_some() {
            "Controls: 0-9 (Type) | Enter (Guess) | Esc (Cancel)"
        } else {
            "Controls: ← ↑ ↓ → (Move) | Enter (Select) | R (Restart) | Q (Quit)"
        };
        let help = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help, help_area);

        if let Some(prompt) = &self.guess {
            draw_guess_dialog(prompt, frame);
        }
        if session.phase().is_finished() {
            draw_finished_overlay(state, frame);
        }
    }
}

fn draw_guess_dialog(prompt: &GuessPrompt, frame: &mut Frame<'_>) {
    let area = widgets::centered_rect(frame.area(), 36, 7);
    frame.render_widget(Clear, area);
    let block = Block::bordered().title(" Claim a cell ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_style = if prompt.rejected {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::from("What number is hidden here?").centered(),
        Line::default(),
        Line::from(Span::styled(format!("{}_", prompt.input), input_style)).centered(),
    ];
    if prompt.rejected {
        lines.push(
            Line::from("Incorrect! Try again.")
                .style(Style::default().fg(Color::Red))
                .centered(),
        );
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_finished_overlay(state: &MatchState, frame: &mut Frame<'_>) {
    let leaders = state.leaders();
    let height = 7 + leaders.len() as u16;
    let area = widgets::centered_rect(frame.area(), 40, height);
    frame.render_widget(Clear, area);
    let block = Block::bordered().title(" Game Over ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from("The board is full!").centered(),
        Line::default(),
        Line::from(if leaders.len() > 1 { "It's a tie between:" } else { "Winner:" }).centered(),
    ];
    for player in &leaders {
        lines.push(
            Line::from(vec![
                Span::styled(
                    "● ",
                    Style::default().fg(widgets::player_color(player.color())),
                ),
                Span::styled(
                    format!("{} - {} pts", player.name(), player.score()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
        );
    }
    lines.push(Line::default());
    lines.push(Line::from("R (Play Again) | Q (Quit)").centered());
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use chase_engine::{PlayerColor, PlayerConfig};
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::new();
        session
            .start_game(&[
                PlayerConfig::new("Ada", PlayerColor::Red),
                PlayerConfig::new("Grace", PlayerColor::Blue),
            ])
            .unwrap();
        session
    }

    fn type_guess(screen: &mut GameScreen, session: &mut GameSession, digits: &str) {
        for c in digits.chars() {
            screen.handle_event(session, &key(KeyCode::Char(c)));
        }
        screen.handle_event(session, &key(KeyCode::Enter));
    }

    #[test]
    fn test_correct_guess_claims_the_cell() {
        let mut session = playing_session();
        let mut screen = GameScreen::new();

        // Cursor starts at index 0; its hidden number is 1.
        screen.handle_event(&mut session, &key(KeyCode::Enter));
        assert!(screen.guess.is_some());
        type_guess(&mut screen, &mut session, "1");

        assert!(screen.guess.is_none());
        let state = session.match_state().unwrap();
        assert!(!state.board().cell(CellIndex::new(0).unwrap()).is_empty());
        assert_eq!(state.current_player_index(), 1);
    }

    #[test]
    fn test_incorrect_guess_keeps_the_dialog_open() {
        let mut session = playing_session();
        let mut screen = GameScreen::new();

        screen.handle_event(&mut session, &key(KeyCode::Enter));
        type_guess(&mut screen, &mut session, "7");

        let prompt = screen.guess.as_ref().unwrap();
        assert!(prompt.rejected);
        assert!(session
            .match_state()
            .unwrap()
            .board()
            .cell(CellIndex::new(0).unwrap())
            .is_empty());
        // Still the same player's turn; retries are unlimited.
        assert_eq!(session.match_state().unwrap().current_player_index(), 0);
    }

    #[test]
    fn test_selecting_occupied_cell_is_ignored() {
        let mut session = playing_session();
        let mut screen = GameScreen::new();

        screen.handle_event(&mut session, &key(KeyCode::Enter));
        type_guess(&mut screen, &mut session, "1");

        // Second player tries the same cell.
        screen.handle_event(&mut session, &key(KeyCode::Enter));
        assert!(screen.guess.is_none());
    }

    #[test]
    fn test_cursor_stays_on_the_board() {
        let mut session = playing_session();
        let mut screen = GameScreen::new();

        screen.handle_event(&mut session, &key(KeyCode::Up));
        screen.handle_event(&mut session, &key(KeyCode::Left));
        assert_eq!(screen.cursor.index(), 0);

        screen.handle_event(&mut session, &key(KeyCode::Down));
        screen.handle_event(&mut session, &key(KeyCode::Right));
        assert_eq!(screen.cursor.index(), 11);
    }

    #[test]
    fn test_restart_returns_to_setup() {
        let mut session = playing_session();
        let mut screen = GameScreen::new();

        let transition = screen.handle_event(&mut session, &key(KeyCode::Char('r')));
        assert!(matches!(transition, Transition::ToSetup));
        assert!(session.phase().is_setup());
    }
}
