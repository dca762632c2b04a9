use std::iter;

use chase_engine::{BOARD_SIZE, Board, Cell, CellIndex, Player};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, BlockExt, Widget},
};

/// Character cells per board column and row.
const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 1;

/// Renders the 10×10 grid.
///
/// Unclaimed cells show `?`; claimed cells show their hidden number in the
/// owner's color. Retired cells keep the number but are dimmed. The cursor
/// cell is drawn reversed.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    players: &'a [Player],
    cursor: Option<CellIndex>,
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board, players: &'a [Player]) -> Self {
        Self {
            board,
            players,
            cursor: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: CellIndex) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Total width including the surrounding block.
    #[must_use]
    pub fn width() -> u16 {
        BOARD_SIZE as u16 * CELL_WIDTH + 2
    }

    /// Total height including the surrounding block.
    #[must_use]
    pub fn height() -> u16 {
        BOARD_SIZE as u16 * CELL_HEIGHT + 2
    }

    fn cell_style(&self, index: CellIndex, cell: Cell) -> Style {
        let mut style = match cell {
            Cell::Empty => Style::default().fg(Color::DarkGray),
            Cell::Claimed { owner, retired } => {
                let color = self
                    .players
                    .iter()
                    .find(|player| player.id() == owner)
                    .map_or(Color::White, |player| super::player_color(player.color()));
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                if retired {
                    style.add_modifier(Modifier::DIM)
                } else {
                    style
                }
            }
        };
        if self.cursor == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..BOARD_SIZE).map(|_| Constraint::Length(CELL_WIDTH));
        let row_constraints = (0..BOARD_SIZE).map(|_| Constraint::Length(CELL_HEIGHT));
        let horizontal = Layout::horizontal(col_constraints);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout::<{ BOARD_SIZE }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ BOARD_SIZE }>(&horizontal));

        for (row_index, (grid_row, row)) in iter::zip(grid_rows, self.board.rows()).enumerate() {
            for (col_index, (grid_cell, cell)) in iter::zip(grid_row, row).enumerate() {
                let Some(index) = CellIndex::from_row_col(row_index, col_index) else {
                    continue;
                };
                let symbol = match cell {
                    Cell::Empty => "?".to_string(),
                    Cell::Claimed { .. } => index.hidden_number().to_string(),
                };
                Text::from(symbol)
                    .style(self.cell_style(index, *cell))
                    .centered()
                    .render(grid_cell, buf);
            }
        }
    }
}
