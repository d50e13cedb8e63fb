use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char(' ') => app.toggle_mode(),
        KeyCode::Char('f') => app.cycle_face_style(),
        KeyCode::Char('h') => app.toggle_hour_format(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}
