//! Sidebar navigation widget
//!
//! Renders the logo block and one row per enabled navigation entry.
//! The row matching the active selection gets the selected style; the
//! cursor row is highlighted independently of selection.

use crate::config::NavEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Fixed-size logo block shown above the navigation rows.
const LOGO: [&str; 3] = ["  ___  ___ ___", " / _ |/ __/  _/", "/_/|_|\\_,_/_/ dash"];

/// Rows between the top border and the first navigation row: the logo
/// lines plus one blank separator line.
pub const LOGO_HEIGHT: u16 = LOGO.len() as u16 + 1;

/// Widget for the sidebar navigation pane
#[derive(Debug)]
pub struct SidebarWidget<'a> {
    entries: Vec<&'a NavEntry>,
    active: &'a str,
    cursor: usize,
}

impl<'a> SidebarWidget<'a> {
    /// Create a sidebar widget over the enabled entries.
    #[must_use]
    pub fn new(entries: Vec<&'a NavEntry>, active: &'a str, cursor: usize) -> Self {
        Self {
            entries,
            active,
            cursor,
        }
    }

    fn logo(&self) -> Paragraph<'a> {
        let lines: Vec<Line<'a>> = LOGO
            .iter()
            .map(|text| Line::from(Span::styled(*text, Style::default().fg(Color::Cyan))))
            .collect();
        Paragraph::new(lines)
    }

    fn to_list(&self) -> List<'a> {
        let items: Vec<ListItem<'a>> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, &entry)| self.render_row(i, entry))
            .collect();
        List::new(items)
    }

    fn render_row(&self, index: usize, entry: &'a NavEntry) -> ListItem<'a> {
        let selected = !self.active.is_empty() && entry.id == self.active;

        let mut style = Style::default();
        if selected {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if index == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let marker = if selected { "▸" } else { " " };
        let content = Line::from(vec![
            Span::raw(format!("{marker} ")),
            Span::styled(format!("{:<2}", entry.icon), Style::default().fg(Color::Cyan)),
            Span::styled(entry.label.clone(), style),
        ]);

        ListItem::new(content).style(style)
    }
}

impl Widget for SidebarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" agidash ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let logo_area = Rect {
            height: inner.height.min(LOGO.len() as u16),
            ..inner
        };
        self.logo().render(logo_area, buf);

        if inner.height <= LOGO_HEIGHT {
            return;
        }
        let rows_area = Rect {
            y: inner.y + LOGO_HEIGHT,
            height: inner.height - LOGO_HEIGHT,
            ..inner
        };
        self.to_list().render(rows_area, buf);
    }
}

/// Map a click position to a navigation row index within the sidebar pane.
///
/// Returns the zero-based row under `(x, y)`, or `None` when the click
/// landed on the border, the logo block, or outside the pane. The caller
/// still has to bounds-check against the number of entries.
#[must_use]
pub fn row_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if x < inner.x || x >= inner.x.saturating_add(inner.width) {
        return None;
    }

    let rows_start = inner.y.saturating_add(LOGO_HEIGHT);
    if y < rows_start || y >= inner.y.saturating_add(inner.height) {
        return None;
    }

    Some(usize::from(y - rows_start))
}
