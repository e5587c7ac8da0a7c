//! Terminal session for the catalog browser.
//!
//! [`TerminalSession`] owns raw mode and the alternate screen for as long as
//! it lives. Dropping it (including on early `?` returns) puts the terminal
//! back, and a panic hook does the same before the panic message prints.

use anyhow::Result;
use arcade_core::source::CatalogSource;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Takes over the terminal to browse the catalog from `source`.
    pub fn start(source: &CatalogSource) -> Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the session undoes whatever was set up.
        let mut session = Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
        };
        execute!(
            session.terminal.backend_mut(),
            EnterAlternateScreen,
            SetTitle(window_title(source))
        )?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            original_hook(panic_info);
        }));

        session.terminal.clear()?;
        tracing::debug!(source = %source, "Terminal session started");
        Ok(session)
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        tracing::debug!("Terminal session ended");
    }
}

/// Title shown in the terminal window while browsing.
pub fn window_title(source: &CatalogSource) -> String {
    match source {
        CatalogSource::Bundled => "arcade".to_string(),
        other => format!("arcade · {}", other),
    }
}

/// Leaves the alternate screen and cooked mode. Errors are ignored: this
/// runs on drop and during panics, where nothing useful can be done.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, SetTitle(""), Show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_window_title_names_non_default_sources() {
        assert_eq!(window_title(&CatalogSource::Bundled), "arcade");
        assert_eq!(
            window_title(&CatalogSource::File(PathBuf::from("/tmp/games.json"))),
            "arcade · /tmp/games.json"
        );

        let url: CatalogSource = "https://example.com/games.json".parse().unwrap();
        assert_eq!(window_title(&url), "arcade · https://example.com/games.json");
    }
}
