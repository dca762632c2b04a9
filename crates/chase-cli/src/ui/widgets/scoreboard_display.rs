use chase_engine::{MatchState, Phase};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BlockExt, Paragraph, Widget},
};

/// Player list with scores, the current-turn marker, and the line tally.
#[derive(Debug)]
pub struct ScoreboardDisplay<'a> {
    state: &'a MatchState,
    phase: Phase,
    block: Option<Block<'a>>,
}

impl<'a> ScoreboardDisplay<'a> {
    pub fn new(state: &'a MatchState, phase: Phase) -> Self {
        Self {
            state,
            phase,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut lines = Vec::new();
        for (seat, player) in self.state.players().iter().enumerate() {
            let has_turn = self.phase.is_playing() && seat == self.state.current_player_index();
            let marker = if has_turn { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::White)),
                Span::styled(
                    "● ",
                    Style::default().fg(super::player_color(player.color())),
                ),
                Span::styled(
                    format!("{:<14}", player.name()),
                    if has_turn {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
                Span::raw(format!("{:>3} pts", player.score())),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(format!(
            "Lines scored: {}",
            self.state.lines().len()
        )));

        Paragraph::new(lines).render(area, buf);
    }
}
