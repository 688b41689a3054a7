//! Sidebar selection state.
//!
//! Owns which single navigation section is currently highlighted and
//! reports every change to an externally supplied listener. The empty
//! string means nothing is selected.

use std::fmt;

/// Listener invoked with the new active section after every selection change.
pub type SelectListener = Box<dyn FnMut(&str)>;

/// Tracks the active navigation section with click-again-to-deselect
/// semantics.
///
/// The sidebar does not own the meaning of an identifier; unrecognized
/// identifiers are stored without validation and handed to the listener
/// as-is.
#[derive(Default)]
pub struct Sidebar {
    active: String,
    listener: Option<SelectListener>,
}

impl Sidebar {
    /// Create a sidebar with nothing selected and no listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the selection listener, replacing any previous one.
    pub fn on_select(&mut self, listener: SelectListener) {
        self.listener = Some(listener);
    }

    /// Identifier of the active section; empty when nothing is selected.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether the given section is the active one.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        !self.active.is_empty() && self.active == id
    }

    /// Toggle the given section.
    ///
    /// Selecting the section that is already active deselects it;
    /// anything else becomes the new active section. The listener is
    /// invoked with the new active value after every call.
    pub fn select(&mut self, id: &str) {
        if self.active == id {
            self.active.clear();
        } else {
            self.active = id.to_string();
        }

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.active);
        }
    }
}

impl fmt::Debug for Sidebar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sidebar")
            .field("active", &self.active)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
