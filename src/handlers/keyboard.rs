//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal dialogs get the
//! first look at every key; the active screen handles the rest.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use chirptui::model::VimCommandState;
use chirptui::{ProfileTab, Screen};

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits
    if ctrl && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Compose dialog swallows every key while open
    if app.model.ui.compose.is_some() {
        handle_compose_key(app, key);
        return Ok(());
    }

    if app.model.ui.post_detail.is_some() {
        handle_post_detail_key(app, key);
        return Ok(());
    }

    // A shared key between two 'g' presses cancels the pending 'gg'
    if key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    // Keys shared by every screen
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return Ok(());
        }
        KeyCode::Char('n') => {
            app.open_compose();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.go_home();
            return Ok(());
        }
        KeyCode::Char('2') | KeyCode::Char('/') => {
            app.show_search_placeholder();
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.go_to_profile();
            return Ok(());
        }
        _ => {}
    }

    match app.model.ui.screen {
        Screen::Timeline => handle_timeline_key(app, key),
        Screen::Profile => handle_profile_key(app, key),
    }

    Ok(())
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.model.ui.compose = None;
        }
        KeyCode::Char('s') if ctrl => app.submit_compose(),
        KeyCode::Char('x') if ctrl => {
            if let Some(compose) = &mut app.model.ui.compose {
                compose.clear_attachment();
            }
        }
        // Other control chords are not text
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Tab | KeyCode::BackTab => {
            if let Some(compose) = &mut app.model.ui.compose {
                compose.toggle_field();
            }
        }
        KeyCode::Enter => {
            let on_attachment = app
                .model
                .ui
                .compose
                .as_ref()
                .map(|c| c.field == chirptui::model::ComposeField::Attachment)
                .unwrap_or(false);
            if on_attachment {
                app.submit_compose();
            } else if let Some(compose) = &mut app.model.ui.compose {
                compose.insert_newline();
            }
        }
        KeyCode::Backspace => {
            if let Some(compose) = &mut app.model.ui.compose {
                compose.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(compose) = &mut app.model.ui.compose {
                compose.insert_char(c);
            }
        }
        _ => {}
    }
}

fn handle_post_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_post_detail(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_post_detail(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_post_detail(1),
        _ => {}
    }
}

fn handle_timeline_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let vim_mode = app.model.ui.vim_mode;
    let page = app.model.navigation.visible_cards.max(1);

    // 'gg' needs two presses; anything else cancels the pending 'g'
    if vim_mode && key.code == KeyCode::Char('g') && !ctrl {
        if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
            app.model.ui.vim_command_state = VimCommandState::None;
            app.go_home();
        } else {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        return;
    }
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char('j') if vim_mode => app.select_next(),
        KeyCode::Char('k') if vim_mode => app.select_prev(),
        KeyCode::Char('d') if vim_mode && ctrl => app.page_down((page / 2).max(1)),
        KeyCode::Char('u') if vim_mode && ctrl => app.page_up((page / 2).max(1)),
        KeyCode::Char('G') if vim_mode => app.select_last(),
        KeyCode::PageDown => app.page_down(page),
        KeyCode::PageUp => app.page_up(page),
        KeyCode::Home => app.go_home(),
        KeyCode::Char('g') => app.go_home(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_selected_post(),
        KeyCode::Char('p') => app.go_to_profile(),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let on_posts_tab = app.model.ui.profile_tab == ProfileTab::Posts;

    match key.code {
        KeyCode::Down if on_posts_tab => app.select_next_own_post(),
        KeyCode::Up if on_posts_tab => app.select_prev_own_post(),
        KeyCode::Char('j') if vim_mode && on_posts_tab => app.select_next_own_post(),
        KeyCode::Char('k') if vim_mode && on_posts_tab => app.select_prev_own_post(),
        KeyCode::Enter if on_posts_tab => app.open_selected_own_post(),
        KeyCode::Esc | KeyCode::Backspace => app.leave_profile(),
        KeyCode::Char('p') => app.leave_profile(),
        KeyCode::Right | KeyCode::Tab => app.next_profile_tab(),
        KeyCode::Left | KeyCode::BackTab => app.prev_profile_tab(),
        KeyCode::Char('l') if vim_mode => app.next_profile_tab(),
        KeyCode::Char('h') if vim_mode => app.prev_profile_tab(),
        KeyCode::Char('e') => app.show_edit_profile_placeholder(),
        KeyCode::Home => app.go_home(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirptui::config::Config;
    use chirptui::feed::PostId;

    fn app(vim_mode: bool) -> App {
        let config = Config {
            vim_mode,
            image_preview_enabled: false,
            ..Config::default()
        };
        App::new(config, false)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_shared_key_cancels_pending_gg() {
        let mut app = app(true);
        app.model.navigation.selected = Some(5);

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.navigation.selected, Some(5));

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.navigation.selected, Some(0));
    }

    #[test]
    fn test_profile_posts_navigate_and_open() {
        let mut app = app(false);
        for body in ["first", "second", "third"] {
            app.feed.create_post(body, None).unwrap();
        }

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.model.ui.screen, Screen::Profile);
        assert_eq!(app.model.profile_posts.selected, Some(0));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.profile_posts.selected, Some(1));
        assert_eq!(
            app.model.ui.post_detail.as_ref().map(|d| d.post_id),
            Some(PostId(27))
        );
    }

    #[test]
    fn test_profile_up_wraps_within_own_posts() {
        let mut app = app(false);
        app.feed.create_post("first", None).unwrap();
        app.feed.create_post("second", None).unwrap();

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.model.profile_posts.selected, Some(1));
        // Timeline selection is untouched
        assert_eq!(app.model.navigation.selected, Some(0));
    }
}
