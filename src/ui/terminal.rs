//! Raw mode and alternate screen setup with guaranteed teardown

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::panic;
use tracing::warn;

/// Puts the terminal back the way the shell expects it when dropped.
///
/// Drop runs on early `?` returns and on unwinding, so no exit path leaves
/// the shell in raw mode or on the alternate screen.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl TerminalGuard<Stdout> {
    /// Enable raw mode and switch stdout to the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard {
            out: io::stdout(),
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    fn restore(&mut self) -> io::Result<()> {
        let raw = if std::mem::replace(&mut self.raw_mode, false) {
            disable_raw_mode()
        } else {
            Ok(())
        };
        execute!(self.out, LeaveAlternateScreen, Show)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Restore the terminal before the default panic message is printed, so
/// the message lands on the normal screen instead of the discarded one.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        previous(info);
    }));
}
