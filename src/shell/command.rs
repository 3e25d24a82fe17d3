//! User commands and their keyboard bindings

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::stream::{LocalBoxStream, StreamExt};
use tracing::warn;

use crate::state::FlashInterval;

/// Something the user asked the widget to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    PauseResume,
    /// Open the interval menu, or close it if it is already open
    ToggleMenu,
    /// Pick the menu entry at this index
    SelectPreset(usize),
    SetInterval(FlashInterval),
    /// Dismiss the menu if open, otherwise close the widget
    Cancel,
    /// Log a JSON status snapshot
    Status,
    Close,
}

/// Map a key press to a command
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Command::Close),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(Command::PauseResume),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMenu),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Status),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(Command::Close)
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            c.to_digit(10).map(|d| Command::SelectPreset(d as usize))
        }
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

/// Commands read from the terminal's key events
pub fn key_commands() -> LocalBoxStream<'static, Command> {
    EventStream::new()
        .filter_map(|event| async move {
            match event {
                Ok(Event::Key(key)) => command_for_key(key),
                Ok(_) => None,
                Err(e) => {
                    warn!("Failed to read terminal event: {}", e);
                    None
                }
            }
        })
        .boxed_local()
}
