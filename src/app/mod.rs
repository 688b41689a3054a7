//! Application state and action handling

mod actions;
mod sidebar;
mod state;

pub use actions::Actions;
pub use sidebar::{SelectListener, Sidebar};
pub use state::App;
