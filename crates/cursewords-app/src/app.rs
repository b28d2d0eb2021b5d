//! The interactive terminal loop.

use std::{
    io::{self, Write},
    time::Instant,
};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use crate::{error::AppError, session::Session, ui};

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            log::warn!("failed to leave the alternate screen: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            log::warn!("failed to disable raw mode: {err}");
        }
    }
}

/// Runs the session until the player quits.
///
/// Input is read one event at a time. While a status message is showing, the wait
/// for input is bounded by its deadline so the message is cleared on time.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    while !session.should_quit() {
        ui::render(&mut stdout, session)?;
        stdout.flush()?;

        let ready = match session.status().next_deadline() {
            Some(deadline) => event::poll(deadline.saturating_duration_since(Instant::now()))?,
            None => true,
        };
        if ready {
            // Resizes and other events only trigger a redraw.
            if let Event::Key(key) = event::read()? {
                session.handle_key(&key, Instant::now());
            }
        }
        session.tick(Instant::now());
    }

    log::info!("quitting");
    Ok(())
}
