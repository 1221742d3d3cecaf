//! Terminal setup and restore.
//!
//! Mouse capture is enabled on init so hover can drive tooltips and
//! flyouts; restore disables it again before leaving the alternate screen.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use navrail_core::prelude::*;
use ratatui::DefaultTerminal;

pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(e.to_string()))?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(std::io::stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(e.to_string()))?;
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}

/// Restore the terminal before the default panic handler runs, so a panic
/// never leaves the user's shell in raw mode with mouse capture on.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        hook(info);
    }));
}
