//! Pocket calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocket-calculator                  # Keyboard and mouse
//! pocket-calculator --no-mouse       # Keyboard only
//! pocket-calculator -vv --log-file calc.log
//! ```

use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use tracing::info;

use pocket_calculator::config::{AppConfig, Cli};
use pocket_calculator::error::AppResult;
use pocket_calculator::logging::initialize_logging;
use pocket_calculator::tui::{render, CalculatorApp, TerminalSession};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from(&cli);
    initialize_logging(&config)?;
    info!(mouse = config.mouse, help = config.show_help, "starting");

    let mut app = CalculatorApp::new().with_help(config.show_help);
    let mut session = TerminalSession::enter(config.mouse)?;
    run_app(&mut app, &mut session)?;

    info!(display = app.display(), "exiting");
    Ok(())
}

fn run_app(app: &mut CalculatorApp, session: &mut TerminalSession) -> AppResult<()> {
    let terminal = session.terminal_mut();

    while !app.should_quit() {
        let area = terminal.draw(|f| render(app, f))?.area;

        match event::read()? {
            Event::Key(key) => {
                app.handle_key_event(key);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(area, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    Ok(())
}
