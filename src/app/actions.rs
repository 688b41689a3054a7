//! Action handlers for navigation input.
//!
//! Toggle entries go through the sidebar selection state; authorize
//! entries bypass it entirely and hand the browser to the OAuth
//! authorization page.

use crate::app::state::App;
use crate::config::NavAction;
use crate::oauth;
use anyhow::Result;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

type Opener = Box<dyn Fn(&Url) -> Result<()>>;

/// Handles activation of navigation entries.
pub struct Actions {
    opener: Opener,
}

impl Default for Actions {
    fn default() -> Self {
        Self::new()
    }
}

impl Actions {
    /// Create an action handler that opens URLs in the system browser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            opener: Box::new(oauth::open_in_browser),
        }
    }

    /// Create an action handler with a custom URL opener.
    ///
    /// Used by tests and by embedders that open URLs some other way.
    #[must_use]
    pub fn with_opener(opener: Opener) -> Self {
        Self { opener }
    }

    /// Activate the navigation entry under the cursor.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` leaves room for handlers that
    /// can fail.
    pub fn activate_cursor(&self, app: &mut App) -> Result<()> {
        let Some(entry) = app.cursor_entry() else {
            return Ok(());
        };
        let (id, action) = (entry.id.clone(), entry.action);
        debug!(id = %id, ?action, "Activating navigation entry");

        match action {
            NavAction::Toggle => app.sidebar.select(&id),
            NavAction::Authorize => self.authorize(app),
        }
        Ok(())
    }

    /// Build the authorization URL and hand it to the browser.
    ///
    /// Never touches the sidebar selection: the authorization page replaces
    /// the whole dashboard, so there is nothing left to highlight. Failures
    /// surface in the status bar; there is no retry.
    pub fn authorize(&self, app: &mut App) {
        let url = match app.config.oauth.authorization_url() {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Authorization URL rejected");
                app.set_error(e.to_string());
                return;
            }
        };

        match (self.opener)(&url) {
            Ok(()) => {
                let host = url.host_str().unwrap_or("authorization page");
                app.set_status(format!("Opening {host} in browser"));
            }
            Err(e) => {
                warn!(error = %e, "Browser launch failed");
                app.set_error(format!("Failed to open browser: {e}"));
            }
        }
    }
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actions").finish_non_exhaustive()
    }
}
