//! Application state

use crate::app::sidebar::Sidebar;
use crate::config::{Config, NavEntry};
use tracing::info;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Selection state for the navigation sidebar
    pub sidebar: Sidebar,

    /// Cursor position within the enabled navigation entries
    pub cursor: usize,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Last error message (if any)
    pub last_error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application with the given config.
    ///
    /// The sidebar listener logs selection changes; embedders that need to
    /// react to the selection can replace it via [`Sidebar::on_select`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut sidebar = Sidebar::new();
        sidebar.on_select(Box::new(|section| {
            info!(section, "Selection changed");
        }));

        Self {
            config,
            sidebar,
            cursor: 0,
            should_quit: false,
            last_error: None,
            status_message: None,
        }
    }

    /// Navigation entries that render, in display order.
    #[must_use]
    pub fn nav_entries(&self) -> Vec<&NavEntry> {
        self.config.enabled_nav()
    }

    /// Number of rendered navigation entries.
    #[must_use]
    pub fn nav_len(&self) -> usize {
        self.nav_entries().len()
    }

    /// The entry matching the active selection, if any.
    ///
    /// Unrecognized identifiers can live in the sidebar state without a
    /// matching entry; those render as no active section.
    #[must_use]
    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.nav_entries()
            .into_iter()
            .find(|entry| self.sidebar.is_selected(&entry.id))
    }

    /// The navigation entry under the cursor.
    #[must_use]
    pub fn cursor_entry(&self) -> Option<&NavEntry> {
        self.nav_entries().get(self.cursor).copied()
    }

    /// Move the cursor to the next navigation entry, wrapping around.
    pub fn select_next(&mut self) {
        let len = self.nav_len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor to the previous navigation entry, wrapping around.
    pub fn select_prev(&mut self) {
        let len = self.nav_len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Set a status message, clearing any previous error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.last_error = None;
    }

    /// Set an error message, clearing any previous status.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.status_message = None;
    }

    /// Clear both status and error messages.
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.last_error = None;
    }
}
