//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, current screen, dialogs, popups, and visual state.

use std::time::Instant;

use super::types::{ComposeState, PostDetailState, VimCommandState};
use crate::{ProfileTab, Screen, ThemeMode};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Active color scheme
    pub theme: ThemeMode,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // SCREENS
    // ============================================
    pub screen: Screen,

    /// Selected tab on the profile screen
    pub profile_tab: ProfileTab,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Compose dialog (None when closed)
    pub compose: Option<ComposeState>,

    /// Post detail popup
    pub post_detail: Option<PostDetailState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Clear the terminal for N frames (removes stale image graphics)
    pub graphics_cleanup_frames: u8,

    /// Font size for image preview (width, height)
    pub image_font_size: Option<(u16, u16)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, theme: ThemeMode) -> Self {
        Self {
            theme,
            vim_mode,
            vim_command_state: VimCommandState::None,
            screen: Screen::Timeline,
            profile_tab: ProfileTab::Posts,
            compose: None,
            post_detail: None,
            toast_message: None,
            graphics_cleanup_frames: 0,
            image_font_size: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.compose.is_some() || self.post_detail.is_some()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.compose = None;
        if self.post_detail.take().is_some() {
            self.graphics_cleanup_frames = 1;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = crate::logic::ui::toggle_theme(self.theme);
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast has been visible long enough
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
