//! Main TUI run loop.
//!
//! Synchronous draw/poll/update loop: event polling times out every 50ms
//! and yields a `Tick`, which redraws so in-flight tweens keep moving.

use navrail_app::handler::update;
use navrail_app::state::AppState;
use navrail_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the TUI until the user quits. Restores the terminal on the way
/// out, including on error.
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut state);
    terminal::restore()?;

    result
}

fn run_loop(terminal: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    info!("Starting UI loop");

    while state.running {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            // Chase follow-up messages to quiescence before redrawing
            let mut next = Some(message);
            while let Some(message) = next.take() {
                next = update(state, message).message;
            }
        }
    }

    info!("UI loop finished");
    Ok(())
}
