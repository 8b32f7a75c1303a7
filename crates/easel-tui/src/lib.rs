//! Terminal form for composing image-generation prompts with easel-rs.
//!
//! Renders the [`easel_rs::form::FORM`] layout as a navigable form
//! (ratatui + crossterm), previews the assembled prompt live, and copies
//! it to the system clipboard on demand.
//!
//! # Quick start
//!
//! ```ignore
//! use easel_tui::{TuiConfig, run_tui};
//!
//! let config = TuiConfig::default();
//! run_tui(&config).unwrap();
//! ```

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use easel_rs::assemble::AssembleConfig;
use easel_rs::trace::LogBuffer;
use ratatui::prelude::*;

mod app;
mod clipboard;
mod input;
mod render;

pub use render::{flag_glyph, follow_cursor, log_level_style, truncate_str};

use app::App;
use input::handle_key_event;
use render::render;

/// How long the "copied" indicator stays visible, in milliseconds.
pub const DEFAULT_COPY_FLASH_MS: u64 = 2000;

/// Configuration for the TUI.
pub struct TuiConfig {
    /// Assembly settings (sentinel word, environment prefix, version token).
    pub assemble: AssembleConfig,
    /// How long the "copied" indicator stays visible.
    pub copy_flash: Duration,
    /// Optional log buffer from the tracing layer.
    ///
    /// When set, the TUI drains pending log lines from this buffer once
    /// per frame into the log pane. Logging from anywhere in the process
    /// never touches the terminal directly.
    pub log_buffer: Option<LogBuffer>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            assemble: AssembleConfig::default(),
            copy_flash: Duration::from_millis(DEFAULT_COPY_FLASH_MS),
            log_buffer: None,
        }
    }
}

/// Run the TUI event loop (blocking).
///
/// Returns when the user presses `q` or Ctrl+C.
pub fn run_tui(config: &TuiConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(config.assemble.clone(), config.copy_flash);

    loop {
        if app.should_quit {
            break;
        }

        // Flush pending log lines from the tracing layer before rendering.
        if let Some(ref log_buf) = config.log_buffer {
            log_buf.drain_into(&mut app.logs);
        }

        terminal.draw(|frame| {
            render(frame, &app);
        })?;

        // Poll for input events (100ms timeout for responsive rendering).
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            handle_key_event(key, &mut app);
        }
    }

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_config_default() {
        let config = TuiConfig::default();
        assert_eq!(config.copy_flash, Duration::from_millis(2000));
        assert!(config.log_buffer.is_none());
    }

    #[test]
    fn app_defaults() {
        let app = App::new(AssembleConfig::default(), Duration::from_millis(2000));
        assert!(!app.should_quit);
        assert!(!app.show_logs);
        assert!(app.status_message.is_none());
        assert!(app.prompt_override.is_none());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.option_cursor, 0);
    }
}
