// ctag: terminal file browser with a tag editor pane

use std::io;

use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use ctag::config::Config;
use ctag::filesystem::{FileSystem, OsFileSystem};
use ctag::tags::Id3TagReader;
use ctag::ui::terminal::{install_panic_hook, TerminalGuard};
use ctag::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    // Held until exit so buffered log lines are flushed
    let _log_guard = ctag::logging::init(&config)?;

    let fs = OsFileSystem::new()?;
    info!(dir = %fs.current_dir().display(), "starting");

    // Set up terminal; the guard restores it on every exit path
    install_panic_hook();
    let terminal_guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(fs, Id3TagReader, size.height, size.width);
    let res = app.run(&mut terminal);

    // Restore terminal
    drop(terminal_guard);

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        return Err(err.into());
    }

    info!("quit");
    Ok(())
}
