//! Terminal event polling and key mapping.
//!
//! Raw crossterm input is translated into dashboard-level [`Event`]s here,
//! so the run loop never sees key codes: a key press either maps to a
//! [`Command`] or is dropped, and only a left click survives as a mouse
//! event.

use crate::config::Config;
use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Dashboard-level input commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit the dashboard.
    Quit,
    /// Move the cursor to the previous navigation row.
    MoveUp,
    /// Move the cursor to the next navigation row.
    MoveDown,
    /// Activate the navigation row under the cursor.
    Activate,
}

/// Events delivered to the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing actionable happened within the poll interval.
    Tick,
    /// A key press that maps to a dashboard command.
    Command(Command),
    /// Left click at the given terminal position.
    Click {
        /// Terminal column of the click.
        column: u16,
        /// Terminal row of the click.
        row: u16,
    },
    /// Terminal resize.
    Resize(u16, u16),
}

/// Polls the terminal and translates raw input into [`Event`]s.
#[derive(Debug)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Create a handler polling at the interval the config asks for.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Poll for the next event.
    ///
    /// Unmapped keys, key repeats and releases, and mouse activity other
    /// than a left click all come back as [`Event::Tick`].
    ///
    /// # Errors
    ///
    /// Returns an error if polling the terminal fails.
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.poll_interval)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            CrosstermEvent::Key(key) => map_key(key).map_or(Event::Tick, Event::Command),
            CrosstermEvent::Mouse(mouse) => map_mouse(mouse),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        })
    }

    /// The configured poll interval.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

/// Map a key press to a dashboard command.
///
/// Repeats and releases never map; holding a key must not re-activate the
/// entry under the cursor.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Event {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        Event::Click {
            column: mouse.column,
            row: mouse.row,
        }
    } else {
        Event::Tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys_map_to_quit() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_movement_keys_map_in_both_vim_and_arrow_flavors() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Command::MoveUp));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(Command::MoveUp));
        assert_eq!(map_key(press(KeyCode::Down)), Some(Command::MoveDown));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(Command::MoveDown));
    }

    #[test]
    fn test_enter_and_space_activate() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Command::Activate));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Command::Activate));
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
        // Plain 'c' without Ctrl is not quit.
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_key_release_does_not_reactivate() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_only_left_clicks_survive_as_mouse_events() {
        let left = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(left), Event::Click { column: 3, row: 7 });

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..left
        };
        assert_eq!(map_mouse(scroll), Event::Tick);
    }

    #[test]
    fn test_handler_polls_at_configured_interval() {
        let config = Config {
            poll_interval_ms: 250,
            ..Config::default()
        };
        let handler = Handler::from_config(&config);
        assert_eq!(handler.poll_interval(), Duration::from_millis(250));
    }
}
