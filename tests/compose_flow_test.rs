//! Tests for the compose-and-publish flow through the model
//!
//! Typing a draft, submitting it to the store and reacting to the store's
//! notification the way the event loop does.

use chirptui::feed::{FeedError, FeedStore, PostId};
use chirptui::model::{ComposeField, Model, POSTED_TOAST};
use chirptui::{Screen, ThemeMode};

fn type_text(model: &mut Model, text: &str) {
    let compose = model.ui.compose.as_mut().unwrap();
    for c in text.chars() {
        compose.insert_char(c);
    }
}

/// Test: Publishing returns to the timeline head with a toast
#[test]
fn test_publish_flow() {
    let mut store = FeedStore::initialize();
    let mut rx = store.subscribe();
    let mut model = Model::new(false, ThemeMode::Light);
    model.navigation.selected = Some(10);
    model.navigation.scroll_offset = 8;
    model.ui.screen = Screen::Profile;

    model.open_compose();
    type_text(&mut model, "Shipping it");
    assert!(model.ui.compose.as_ref().unwrap().can_post());

    let result = model.submit_compose(&mut store);
    assert_eq!(result, Some(Ok(PostId(26))));
    assert!(model.ui.compose.is_none());

    // Event loop drains the store notification
    while let Ok(event) = rx.try_recv() {
        model.apply_feed_event(&event, store.len());
    }

    assert_eq!(model.ui.screen, Screen::Timeline);
    assert_eq!(model.navigation.selected, Some(0));
    assert_eq!(model.navigation.scroll_offset, 0);
    assert_eq!(model.selected_post_id(&store), Some(PostId(26)));
    assert_eq!(
        model.ui.toast_message.as_ref().map(|(m, _)| m.as_str()),
        Some(POSTED_TOAST)
    );
}

/// Test: A blank draft keeps the dialog and leaves the store alone
#[test]
fn test_blank_draft_not_published() {
    let mut store = FeedStore::initialize();
    let mut rx = store.subscribe();
    let mut model = Model::new(false, ThemeMode::Dark);

    model.open_compose();
    type_text(&mut model, "   ");
    assert!(!model.ui.compose.as_ref().unwrap().can_post());

    assert_eq!(model.submit_compose(&mut store), Some(Err(FeedError::BlankBody)));
    assert!(model.ui.compose.is_some());
    assert_eq!(store.len(), 25);
    assert!(rx.try_recv().is_err());
}

/// Test: The picker input becomes the post's attachment
#[test]
fn test_publish_with_attachment() {
    let mut store = FeedStore::initialize();
    let mut model = Model::new(false, ThemeMode::Light);

    model.open_compose();
    type_text(&mut model, "Sunset");
    model.ui.compose.as_mut().unwrap().toggle_field();
    assert_eq!(model.ui.compose.as_ref().unwrap().field, ComposeField::Attachment);
    type_text(&mut model, "sunset");

    model.submit_compose(&mut store).unwrap().unwrap();
    let head = &store.list()[0];
    assert_eq!(head.body, "Sunset");
    assert_eq!(head.attachment.as_ref().map(|a| a.label()), Some("sunset".to_string()));
}

/// Test: Clearing the picker publishes without an attachment
#[test]
fn test_removed_attachment_not_published() {
    let mut store = FeedStore::initialize();
    let mut model = Model::new(false, ThemeMode::Light);

    model.open_compose();
    type_text(&mut model, "No picture after all");
    {
        let compose = model.ui.compose.as_mut().unwrap();
        compose.attachment_input = "/tmp/cat.png".to_string();
        compose.clear_attachment();
    }

    model.submit_compose(&mut store).unwrap().unwrap();
    assert!(store.list()[0].attachment.is_none());
}

/// Test: Opening compose closes the detail popup
#[test]
fn test_compose_replaces_detail_popup() {
    let mut model = Model::new(false, ThemeMode::Light);
    model.ui.post_detail = Some(chirptui::model::PostDetailState {
        post_id: PostId(3),
        scroll_offset: 0,
    });

    model.open_compose();
    assert!(model.ui.post_detail.is_none());
    assert!(model.ui.compose.is_some());
}
