//! Raw-mode terminal session.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// Puts the terminal into raw mode on the alternate screen. Restores it on drop.
///
/// Dropping also runs while a panic unwinds, so the shell is left usable
/// whether the game loop returns, fails, or panics.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode, then switches to the alternate screen with mouse capture.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, drop undoes whatever part of the setup succeeded.
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }

        if let Err(e) = restore_screen(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
pub fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}
