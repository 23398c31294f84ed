//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable UI state for the application.
//! The feed itself lives in [`crate::feed::FeedStore`]; the Model only
//! tracks how it is being looked at.
//!
//! - **NavigationModel**: Timeline selection and scroll position, and the
//!   same for the profile's own-posts list
//! - **UiModel**: Theme, screen, dialogs, popups
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::feed::{FeedError, FeedEvent, FeedStore, PostId};
use crate::{Screen, ThemeMode};

/// Toast shown after a post is published
pub const POSTED_TOAST: &str = "Post published";

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub navigation: NavigationModel,
    /// Selection in the profile's Posts tab
    pub profile_posts: NavigationModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool, theme: ThemeMode) -> Self {
        Self {
            navigation: NavigationModel::new(),
            profile_posts: NavigationModel::new(),
            ui: UiModel::new(vim_mode, theme),
        }
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }

    /// Open an empty compose dialog
    pub fn open_compose(&mut self) {
        self.ui.post_detail = None;
        self.ui.compose = Some(ComposeState::default());
    }

    /// Publish the draft in the compose dialog.
    ///
    /// Returns `None` when no dialog is open. A rejected draft keeps the
    /// dialog open with its contents; a published one closes it.
    pub fn submit_compose(&mut self, store: &mut FeedStore) -> Option<Result<PostId, FeedError>> {
        let compose = self.ui.compose.as_ref()?;
        let result = store
            .create_post(&compose.body, compose.attachment())
            .map(|post| post.id);
        if result.is_ok() {
            self.ui.compose = None;
        }
        Some(result)
    }

    /// React to a store notification
    pub fn apply_feed_event(&mut self, event: &FeedEvent, feed_len: usize) {
        match event {
            FeedEvent::PostCreated { .. } => {
                self.ui.screen = Screen::Timeline;
                self.navigation.scroll_to_head(feed_len);
                self.show_toast(POSTED_TOAST.to_string());
            }
        }
    }

    /// Post currently selected in the timeline
    pub fn selected_post_id(&self, store: &FeedStore) -> Option<PostId> {
        self.navigation
            .selected
            .and_then(|idx| store.list().get(idx))
            .map(|post| post.id)
    }

    /// Post currently selected in the profile's Posts tab
    pub fn selected_own_post_id(&self, store: &FeedStore) -> Option<PostId> {
        let idx = self.profile_posts.selected?;
        store
            .posts_by(&store.author().handle)
            .nth(idx)
            .map(|post| post.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Author;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false, ThemeMode::Light);
        assert!(model.navigation.selected.is_none());
        assert!(!model.ui.vim_mode);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(true, ThemeMode::Dark);
        let cloned = model.clone();
        assert!(cloned.ui.vim_mode);
    }

    #[test]
    fn test_submit_without_dialog_is_none() {
        let mut model = Model::new(false, ThemeMode::Light);
        let mut store = FeedStore::empty(Author::new("A", "a"));
        assert!(model.submit_compose(&mut store).is_none());
    }

    #[test]
    fn test_submit_blank_keeps_dialog_open() {
        let mut model = Model::new(false, ThemeMode::Light);
        let mut store = FeedStore::empty(Author::new("A", "a"));
        model.open_compose();
        model.ui.compose.as_mut().unwrap().body = "   ".to_string();

        let result = model.submit_compose(&mut store);
        assert_eq!(result, Some(Err(FeedError::BlankBody)));
        assert!(model.ui.compose.is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_closes_dialog() {
        let mut model = Model::new(false, ThemeMode::Light);
        let mut store = FeedStore::empty(Author::new("A", "a"));
        model.open_compose();
        model.ui.compose.as_mut().unwrap().body = "hello".to_string();

        assert_eq!(model.submit_compose(&mut store), Some(Ok(PostId(1))));
        assert!(model.ui.compose.is_none());
    }

    #[test]
    fn test_selected_own_post_skips_other_authors() {
        let mut model = Model::new(false, ThemeMode::Light);
        let mut store = FeedStore::initialize();
        for body in ["first", "second", "third"] {
            store.create_post(body, None).unwrap();
        }

        assert_eq!(model.selected_own_post_id(&store), None);

        // Own posts newest first: 28, 27, 26
        model.profile_posts.selected = Some(1);
        assert_eq!(model.selected_own_post_id(&store), Some(PostId(27)));
        model.profile_posts.selected = Some(3);
        assert_eq!(model.selected_own_post_id(&store), None);
    }

    #[test]
    fn test_apply_post_created_jumps_to_head() {
        let mut model = Model::new(false, ThemeMode::Light);
        model.ui.screen = Screen::Profile;
        model.navigation.selected = Some(9);
        model.navigation.scroll_offset = 6;

        model.apply_feed_event(&FeedEvent::PostCreated { id: PostId(26) }, 26);
        assert_eq!(model.ui.screen, Screen::Timeline);
        assert_eq!(model.navigation.selected, Some(0));
        assert_eq!(model.navigation.scroll_offset, 0);
        assert_eq!(
            model.ui.toast_message.as_ref().map(|(m, _)| m.as_str()),
            Some(POSTED_TOAST)
        );
    }
}
