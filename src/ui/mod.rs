// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Light and dark palettes, cover gradient
// - layout: Calculates screen layout (top bar, content, legend, nav bar)
// - render: Main orchestration function that coordinates all rendering
// - top_bar: Screen title, logo and theme indicator
// - post_card: Builds the lines of one timeline card
// - timeline: Scrolling list of post cards with scrollbar
// - profile: Profile header, stats and tabs
// - nav_bar: Bottom navigation and the new post button
// - legend: Renders hotkey legend
// - dialogs: Compose dialog and post detail popup
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod nav_bar;
pub mod post_card;
pub mod profile;
pub mod render;
pub mod theme;
pub mod timeline;
pub mod toast;
pub mod top_bar;

// Re-export main render function for convenience
pub use render::render;
