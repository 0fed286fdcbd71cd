//! Keyboard input
//!
//! Maps crossterm key events onto simulation [`Command`]s.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::Command;

/// Translate a key event into a command, ignoring releases and unbound keys
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(Command::Left),
        KeyCode::Right => Some(Command::Right),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        _ => None,
    }
}

/// Sample the keyboard once without blocking
pub fn poll_command() -> io::Result<Option<Command>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Block until a bound key is pressed
pub fn wait_command() -> io::Result<Command> {
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(command) = map_key(key) {
                return Ok(command);
            }
        }
    }
}
