//! Terminal setup and teardown
//!
//! The terminal is put into raw mode on the alternate screen for as long as
//! a [`TerminalSession`] lives. Dropping the session restores it, including
//! on early returns and panics unwinding through `main`.

use std::fmt;
use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

/// Raw-mode terminal owned for the lifetime of the app
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen, optionally capturing the mouse
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured. Raw mode is
    /// switched back off before returning.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        match Self::setup(mouse) {
            Ok(terminal) => {
                debug!(mouse, "terminal session started");
                Ok(Self { terminal, mouse })
            }
            Err(e) => {
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    fn setup(mouse: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Returns the terminal for drawing
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        if self.mouse {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match self.restore() {
            Ok(()) => debug!("terminal restored"),
            Err(e) => warn!(error = %e, "failed to restore terminal"),
        }
    }
}

impl fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSession")
            .field("mouse", &self.mouse)
            .finish_non_exhaustive()
    }
}
