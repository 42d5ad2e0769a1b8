//! Terminal lifecycle management
//!
//! RAII guard around raw mode and the alternate screen. Restoring the
//! terminal happens in Drop so the shell comes back usable even when
//! the event loop exits through an error path.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Errors raised while acquiring or driving the terminal
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Owns the terminal for the duration of the session
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen, and builds the
    /// ratatui terminal on top of stdout
    ///
    /// Raw mode is rolled back if entering the alternate screen fails,
    /// so a failed setup never leaves the shell in a broken state.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }

    /// Mutable access for drawing frames
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
