//! Chirp timeline TUI library
//!
//! Exposes the feed store, model and pure logic for testing

pub mod config;
pub mod feed;
pub mod logic;
pub mod model;

/// Color scheme used for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Top-level screen being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Timeline,
    Profile,
}

/// Tabs on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Posts,
    Replies,
    Media,
    Likes,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Posts,
        ProfileTab::Replies,
        ProfileTab::Media,
        ProfileTab::Likes,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProfileTab::Posts => "Posts",
            ProfileTab::Replies => "Replies",
            ProfileTab::Media => "Media",
            ProfileTab::Likes => "Likes",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ProfileTab::Posts => 0,
            ProfileTab::Replies => 1,
            ProfileTab::Media => 2,
            ProfileTab::Likes => 3,
        }
    }
}
