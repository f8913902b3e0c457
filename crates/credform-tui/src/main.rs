#![forbid(unsafe_code)]

//! Admin login screen entry point.

mod auth;
mod input;
mod screen;
mod session;

use std::io::{self, Write};
use std::time::Duration;

use auth::BackgroundAuthenticator;
use screen::LoginScreen;
use session::Session;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("credform-tui error: {e}");
        std::process::exit(1);
    }
}

/// Log to the file named by `CREDFORM_LOG`, filtered by `RUST_LOG`.
///
/// stderr is unusable once the terminal is raw, so without the variable
/// logging stays off entirely.
fn init_logging() {
    let Ok(path) = std::env::var("CREDFORM_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("could not open log file {path}: {e}"),
    }
}

fn run() -> io::Result<()> {
    let session = Session::new()?;
    let mut screen = LoginScreen::new();
    let mut authenticator = BackgroundAuthenticator;
    let mut stdout = io::stdout();

    screen.render(&mut stdout)?;
    stdout.flush()?;

    while !screen.should_quit() {
        if session.poll(Duration::from_millis(100))? {
            let event = session.read()?;
            if screen.handle_event(&event, &mut authenticator) {
                screen.render(&mut stdout)?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}
