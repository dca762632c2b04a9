use crossterm::event::Event;
use ratatui::Frame;

/// An input-driven TUI application.
///
/// The runtime draws, blocks on the next terminal event, hands it to the
/// app, and repeats until [`should_exit`](Self::should_exit) returns true.
/// There is no tick clock: the game only changes in response to input.
pub trait App {
    /// Whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event.
    fn handle_event(&mut self, event: Event);

    /// Renders the application.
    fn draw(&self, frame: &mut Frame);
}
