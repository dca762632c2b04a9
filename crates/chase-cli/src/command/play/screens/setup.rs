use chase_engine::{GameSession, MAX_PLAYERS, MIN_PLAYERS, PlayerColor, PlayerConfig, SetupError};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
};

use crate::{command::play::screens::Transition, ui::widgets};

const MAX_NAME_LEN: usize = 14;

/// Player-entry form shown before a match starts.
///
/// One row for the player count, one editable name row per seat; colors are
/// assigned per seat from the preset palette.
#[derive(Debug)]
pub struct SetupScreen {
    names: Vec<String>,
    row: usize,
    error: Option<SetupError>,
    exiting: bool,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            names: default_names(MIN_PLAYERS),
            row: 0,
            error: None,
            exiting: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exiting
    }

    fn count(&self) -> usize {
        self.names.len()
    }

    fn set_count(&mut self, count: usize) {
        let count = count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        while self.names.len() > count {
            self.names.pop();
        }
        while self.names.len() < count {
            self.names.push(format!("Player {}", self.names.len() + 1));
        }
        self.row = self.row.min(self.count());
    }

    pub fn handle_event(&mut self, session: &mut GameSession, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::Stay;
        };
        match key.code {
            KeyCode::Esc => self.exiting = true,
            KeyCode::Up => self.row = self.row.saturating_sub(1),
            KeyCode::Down => self.row = (self.row + 1).min(self.count()),
            KeyCode::Left | KeyCode::Char('-') if self.row == 0 => {
                self.set_count(self.count().saturating_sub(1));
            }
            KeyCode::Right | KeyCode::Char('+') if self.row == 0 => {
                self.set_count(self.count() + 1);
            }
            KeyCode::Enter => return self.start(session),
            KeyCode::Backspace if self.row >= 1 => {
                self.names[self.row - 1].pop();
                self.error = None;
            }
            KeyCode::Char(c) if self.row >= 1 && !c.is_control() => {
                let name = &mut self.names[self.row - 1];
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
                self.error = None;
            }
            _ => {}
        }
        Transition::Stay
    }

    fn start(&mut self, session: &mut GameSession) -> Transition {
        let configs: Vec<_> = self
            .names
            .iter()
            .zip(PlayerColor::ALL)
            .map(|(name, color)| PlayerConfig::new(name.trim(), color))
            .collect();
        match session.start_game(&configs) {
            Ok(()) => Transition::ToGame,
            Err(error) => {
                self.error = Some(error);
                Transition::Stay
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let area = widgets::centered_rect(frame.area(), 44, 12 + self.count() as u16);
        let block = Block::bordered().title(" Hundred Chart Chase ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from("Guess the hidden number to claim a cell;").centered(),
            Line::from("three in a row scores a point.").centered(),
            Line::default(),
        ];

        let focused = |on: bool| {
            if on {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            }
        };
        lines.push(Line::from(vec![
            Span::raw("  Players  "),
            Span::styled(format!("◄ {} ►", self.count()), focused(self.row == 0)),
        ]));
        lines.push(Line::default());

        for (seat, name) in self.names.iter().enumerate() {
            let editing = self.row == seat + 1;
            lines.push(Line::from(vec![
                Span::styled(
                    "  ● ",
                    Style::default().fg(widgets::player_color(PlayerColor::ALL[seat])),
                ),
                Span::styled(format!("{name}{}", if editing { "_" } else { "" }), focused(editing)),
            ]));
        }

        lines.push(Line::default());
        if let Some(error) = &self.error {
            lines.push(
                Line::from(error.to_string())
                    .style(Style::default().fg(Color::Red))
                    .centered(),
            );
        } else {
            lines.push(Line::from("Press Enter to start").centered());
        }

        frame.render_widget(Paragraph::new(lines), inner);

        let help = Text::from("↑ ↓ (Field) | ◄ ► (Players) | Enter (Start) | Esc (Quit)")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        let [_, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas::<2>(frame.area());
        frame.render_widget(help, help_area);
    }
}

fn default_names(count: usize) -> Vec<String> {
    (1..=count).map(|seat| format!("Player {seat}")).collect()
}
