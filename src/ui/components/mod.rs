//! Reusable dashboard widgets

mod content;
mod sidebar;
mod status_bar;

pub use content::ContentWidget;
pub use sidebar::{LOGO_HEIGHT, SidebarWidget, row_at};
pub use status_bar::{StatusBarWidget, StatusContent};
