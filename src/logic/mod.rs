//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - compose: Draft validation and the character counter
//! - formatting: Compact engagement counts
//! - navigation: Selection movement through the timeline
//! - ui: Theme toggling, toast timing, profile tab cycling

pub mod compose;
pub mod formatting;
pub mod navigation;
pub mod ui;
