#![forbid(unsafe_code)]

//! Terminal session guard.
//!
//! Owns raw mode plus the optional modes the login screen needs, and
//! restores everything in reverse order on drop. A panic hook performs
//! the same cleanup so a crash never leaves the terminal raw.
//!
//! Only one `Session` should exist at a time; a second one would fight
//! the first over terminal state.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::event::Event;

/// A terminal session that manages raw mode and cleanup.
#[derive(Debug)]
pub struct Session {
    alternate_screen_enabled: bool,
    focus_events_enabled: bool,
}

impl Session {
    /// Enter raw mode, the alternate screen, and focus-change reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the escape
    /// sequences cannot be written.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut session = Self {
            alternate_screen_enabled: false,
            focus_events_enabled: false,
        };

        let mut stdout = io::stdout();

        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        session.alternate_screen_enabled = true;
        tracing::info!("alternate screen enabled");

        crossterm::execute!(stdout, crossterm::event::EnableFocusChange)?;
        session.focus_events_enabled = true;
        tracing::info!("focus events enabled");

        Ok(session)
    }

    /// Poll for an event with a timeout.
    ///
    /// Returns `Ok(true)` if an event is available, `Ok(false)` on timeout.
    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    /// Read the next event (blocking until available).
    pub fn read(&self) -> io::Result<Event> {
        crossterm::event::read()
    }

    /// Cleanup helper (shared between drop and the panic hook).
    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        if self.focus_events_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableFocusChange);
            self.focus_events_enabled = false;
            tracing::info!("focus events disabled");
        }

        // Always show the cursor before leaving.
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
            tracing::info!("alternate screen disabled");
        }

        // Exit raw mode last.
        let _ = crossterm::terminal::disable_raw_mode();
        tracing::info!("terminal raw mode disabled");

        let _ = stdout.flush();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

/// Restore the terminal without a `Session` handle.
///
/// Used by the panic hook, where the session state is unreachable;
/// disabling modes that were never enabled is harmless.
fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::event::DisableFocusChange);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
