//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental UI concepts.

use crate::feed::{AttachmentRef, PostId};
use crate::logic;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Which input of the compose dialog receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposeField {
    Body,
    /// Picker input: path, URL or bundled asset name
    Attachment,
}

/// Draft being written in the compose dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeState {
    pub body: String,
    pub attachment_input: String,
    pub field: ComposeField,
}

impl Default for ComposeState {
    fn default() -> Self {
        Self {
            body: String::new(),
            attachment_input: String::new(),
            field: ComposeField::Body,
        }
    }
}

impl ComposeState {
    /// Mirrors the enabled state of the "Post" button
    pub fn can_post(&self) -> bool {
        logic::compose::is_postable(&self.body)
    }

    /// Picker selection, if any
    pub fn attachment(&self) -> Option<AttachmentRef> {
        AttachmentRef::from_picker(&self.attachment_input)
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            ComposeField::Body => &mut self.body,
            ComposeField::Attachment => &mut self.attachment_input,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.active_buffer().push(c);
    }

    /// Newlines only go into the body; the picker is a single line
    pub fn insert_newline(&mut self) {
        if self.field == ComposeField::Body {
            self.body.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        self.active_buffer().pop();
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            ComposeField::Body => ComposeField::Attachment,
            ComposeField::Attachment => ComposeField::Body,
        };
    }

    /// "Remove image"
    pub fn clear_attachment(&mut self) {
        self.attachment_input.clear();
    }
}

/// Post detail popup state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDetailState {
    pub post_id: PostId,
    pub scroll_offset: u16,
}
