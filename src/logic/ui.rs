//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::{ProfileTab, ThemeMode};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Flip between the light and dark palettes
///
/// # Examples
/// ```
/// use chirptui::ThemeMode;
/// use chirptui::logic::ui::toggle_theme;
///
/// assert_eq!(toggle_theme(ThemeMode::Light), ThemeMode::Dark);
/// assert_eq!(toggle_theme(ThemeMode::Dark), ThemeMode::Light);
/// ```
pub fn toggle_theme(current: ThemeMode) -> ThemeMode {
    match current {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::Light,
    }
}

/// Whether a toast shown `elapsed_ms` ago should disappear
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Next profile tab to the right, wrapping
pub fn next_profile_tab(current: ProfileTab) -> ProfileTab {
    let idx = (current.index() + 1) % ProfileTab::ALL.len();
    ProfileTab::ALL[idx]
}

/// Next profile tab to the left, wrapping
pub fn prev_profile_tab(current: ProfileTab) -> ProfileTab {
    let len = ProfileTab::ALL.len();
    let idx = (current.index() + len - 1) % len;
    ProfileTab::ALL[idx]
}
