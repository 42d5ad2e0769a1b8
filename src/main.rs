use crossterm::event::{self, Event};

use nu_chef::app::controller::{AppController, AppError};
use nu_chef::app::state::AppEvent;
use nu_chef::input::keyboard::map_key;
use nu_chef::ui::terminal::TerminalGuard;
use nu_chef::ui::view;

fn main() -> Result<(), AppError> {
    let mut app = AppController::new();
    let mut guard = TerminalGuard::new()?;

    // Blocking draw/read/handle loop; each event runs to completion
    // before the next is read.
    loop {
        guard.terminal_mut().draw(|frame| view::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            match map_key(key) {
                Some(AppEvent::Quit) => break,
                Some(app_event) => app.handle_event(app_event),
                None => {}
            }
        }
    }

    Ok(())
}
