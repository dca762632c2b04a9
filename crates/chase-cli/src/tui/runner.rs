use crossterm::event;

use crate::tui::App;

/// Runs the application on the terminal.
///
/// Draw-then-wait loop: every iteration renders the current state and then
/// blocks on the next crossterm event.
pub fn run<A>(app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|frame| app.draw(frame))?;
            let event = event::read()?;
            app.handle_event(event);
        }
        Ok(())
    })
}
