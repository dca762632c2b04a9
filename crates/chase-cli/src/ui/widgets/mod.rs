use chase_engine::PlayerColor;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Color,
};

pub use self::{board_display::BoardDisplay, scoreboard_display::ScoreboardDisplay};

mod board_display;
mod scoreboard_display;

/// Maps a player's preset color onto a terminal color.
pub(crate) fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::Red,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Amber => Color::Yellow,
        PlayerColor::Violet => Color::Magenta,
    }
}

/// A `width`×`height` rectangle centered in `area`, for modal dialogs.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas::<1>(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas::<1>(area);
    area
}
