//! Compose dialog methods
//!
//! Opening the dialog, publishing the draft, and the inert placeholder
//! actions that sit next to it in the chrome.

use crate::{log_debug, App};

/// Toast for the search tab, which has no functionality
pub(crate) const SEARCH_PLACEHOLDER_TOAST: &str = "Info: Search is not available yet";
/// Toast for the "Edit profile" button
pub(crate) const EDIT_PROFILE_PLACEHOLDER_TOAST: &str = "Info: Profile editing is not available yet";

impl App {
    pub(crate) fn open_compose(&mut self) {
        log_debug("Opening compose dialog");
        self.model.open_compose();
        self.model.ui.graphics_cleanup_frames = 1;
    }

    /// Publish the draft if the "Post" button would be enabled.
    ///
    /// A blank draft is a no-op: the dialog stays open and nothing is sent
    /// to the store.
    pub(crate) fn submit_compose(&mut self) {
        let Some(compose) = &self.model.ui.compose else {
            return;
        };
        if !compose.can_post() {
            log_debug("Compose: ignoring submit of blank draft");
            return;
        }

        match self.model.submit_compose(&mut self.feed) {
            Some(Ok(id)) => log_debug(&format!("Compose: published post {}", id)),
            Some(Err(e)) => {
                log_debug(&format!("Compose: store rejected draft: {}", e));
                self.model.show_toast(format!("Error: {}", e));
            }
            None => {}
        }
    }

    pub(crate) fn show_search_placeholder(&mut self) {
        self.model.show_toast(SEARCH_PLACEHOLDER_TOAST.to_string());
    }

    pub(crate) fn show_edit_profile_placeholder(&mut self) {
        self.model.show_toast(EDIT_PROFILE_PLACEHOLDER_TOAST.to_string());
    }
}
