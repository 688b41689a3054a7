//! Content pane widget
//!
//! Echoes the active navigation section. The real section views live in
//! the parent application; the dashboard only reports what is selected.

use crate::config::NavEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Widget for the main content pane
#[derive(Debug)]
pub struct ContentWidget<'a> {
    section: Option<&'a NavEntry>,
}

impl<'a> ContentWidget<'a> {
    /// Create a content widget for the given active section, if any.
    #[must_use]
    pub const fn new(section: Option<&'a NavEntry>) -> Self {
        Self { section }
    }
}

impl Widget for ContentWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Dashboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.section {
            Some(entry) => vec![
                Line::from(Span::styled(
                    entry.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    format!("Section \"{}\" is active.", entry.id),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "Select a section from the sidebar.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
