//! Status bar widget

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct StatusBarWidget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug)]
pub enum StatusContent {
    /// Normal status showing keybindings
    Normal,
    /// Error message
    Error(String),
    /// Status message
    Status(String),
}

impl StatusBarWidget {
    /// Create a new status bar with the default key hints
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            content: StatusContent::Normal,
        }
    }

    /// Create a new status bar with an error message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Error(message.into()),
        }
    }

    /// Create a new status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let span = match &self.content {
            StatusContent::Error(msg) => Span::styled(
                format!(" Error: {msg} "),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            StatusContent::Status(msg) => {
                Span::styled(format!(" {msg} "), Style::default().fg(Color::Green))
            }
            StatusContent::Normal => Span::styled(
                " [↑/↓] move [Enter] activate [q]uit ",
                Style::default().fg(Color::DarkGray),
            ),
        };

        Paragraph::new(span)
    }
}
