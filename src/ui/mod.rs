//! Dashboard layout and rendering

pub mod components;

pub use components::{ContentWidget, SidebarWidget, StatusBarWidget};

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar pane in columns.
pub const SIDEBAR_WIDTH: u16 = 24;

/// Split the frame into sidebar, content, and status-line areas.
#[must_use]
pub fn panes(area: Rect) -> (Rect, Rect, Rect) {
    let main_height = area.height.saturating_sub(1);
    let main = Rect {
        height: main_height,
        ..area
    };
    let status = Rect {
        y: area.y + main_height,
        height: area.height - main_height,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main);

    (chunks[0], chunks[1], status)
}

/// Render the full dashboard frame.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let (sidebar_area, content_area, status_area) = panes(frame.area());

    let sidebar = SidebarWidget::new(app.nav_entries(), app.sidebar.active(), app.cursor);
    frame.render_widget(sidebar, sidebar_area);

    frame.render_widget(ContentWidget::new(app.active_entry()), content_area);

    let status_bar = if let Some(error) = &app.last_error {
        StatusBarWidget::error(error.clone())
    } else if let Some(message) = &app.status_message {
        StatusBarWidget::status(message.clone())
    } else {
        StatusBarWidget::normal()
    };
    frame.render_widget(status_bar.to_paragraph(), status_area);
}
