use std::fmt;

use super::attachment::AttachmentRef;

/// Identifier of a post, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(pub u32);

impl PostId {
    /// The following id, or `None` once `u32::MAX` is reached
    pub fn next(self) -> Option<PostId> {
        self.0.checked_add(1).map(PostId)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub display_name: String,
    /// Handle without the leading '@'
    pub handle: String,
}

impl Author {
    pub fn new(display_name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            handle: handle.into(),
        }
    }

    /// Handle as shown on cards ("@handle")
    pub fn at_handle(&self) -> String {
        format!("@{}", self.handle)
    }

    /// Up to two uppercase initials from the display name ("Tevin Muchiri" -> "TM")
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect()
    }
}

/// A single timeline entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub body: String,
    /// Display-only relative time ("2h", "1d", "now")
    pub posted_at: String,
    pub reply_count: u32,
    pub repost_count: u32,
    pub like_count: u32,
    pub attachment: Option<AttachmentRef>,
}

impl Post {
    pub fn is_by(&self, handle: &str) -> bool {
        self.author.handle == handle
    }
}
