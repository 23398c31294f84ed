use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

use chirptui::feed::Post;
use chirptui::model::NavigationModel;

use super::{layout, post_card, theme::Palette};

/// Cards that start inside a viewport of `height` rows, beginning at `offset`
fn cards_in_view(posts: &[Post], offset: usize, width: u16, height: u16) -> usize {
    let mut used = 0u32;
    let mut count = 0;
    for post in posts.iter().skip(offset) {
        if used >= height as u32 {
            break;
        }
        used += post_card::card_height(post, width) as u32;
        count += 1;
    }
    count.max(1)
}

/// Render a list of post cards, newest first
///
/// The list keeps the selected card on screen; the resulting offset and page
/// size are written back into `navigation`.
pub fn render_post_list(
    f: &mut Frame,
    area: Rect,
    posts: &[Post],
    navigation: &mut NavigationModel,
    palette: &Palette,
    empty_message: &str,
) {
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    if posts.is_empty() {
        render_empty_state(f, area, palette, empty_message);
        navigation.scroll_offset = 0;
        navigation.visible_cards = 1;
        return;
    }

    let (cards_area, track_area) = layout::split_scrollbar(area);
    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| ListItem::new(post_card::build_post_card(post, cards_area.width, palette)))
        .collect();

    let list = List::new(items)
        .style(Style::default().bg(palette.background))
        .highlight_style(Style::default().bg(palette.highlight));

    // Create temporary ListState for rendering
    let mut state = ListState::default()
        .with_offset(navigation.scroll_offset.min(posts.len() - 1))
        .with_selected(navigation.selected);
    f.render_stateful_widget(list, cards_area, &mut state);

    // Sync back the scroll position
    navigation.scroll_offset = state.offset();
    navigation.visible_cards =
        cards_in_view(posts, state.offset(), cards_area.width, cards_area.height);

    let total_items = posts.len();
    if total_items > navigation.visible_cards {
        let mut scrollbar_state =
            ScrollbarState::new(total_items.saturating_sub(navigation.visible_cards))
                .viewport_content_length(navigation.visible_cards)
                .position(state.offset());

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .track_style(Style::default().fg(palette.outline))
            .thumb_style(Style::default().fg(palette.muted));

        f.render_stateful_widget(scrollbar, track_area, &mut scrollbar_state);
    }
}

fn render_empty_state(f: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Press n to write the first post",
            Style::default().fg(palette.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirptui::feed::{Author, PostId};
    use chirptui::ThemeMode;
    use ratatui::{backend::TestBackend, Terminal};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 20;

    /// Cards of four rows each: header, body, action bar, divider
    fn posts(count: u32) -> Vec<Post> {
        (1..=count)
            .map(|id| Post {
                id: PostId(id),
                author: Author::new("Someone", "someone"),
                body: format!("post {}", id),
                posted_at: "1h".to_string(),
                reply_count: 0,
                repost_count: 0,
                like_count: 0,
                attachment: None,
            })
            .collect()
    }

    /// Render the list into a test terminal and return the scrollbar column
    fn render(posts: &[Post], navigation: &mut NavigationModel) -> Vec<String> {
        let palette = Palette::for_mode(ThemeMode::Light);
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_post_list(f, area, posts, navigation, &palette, "empty");
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..HEIGHT)
            .map(|y| {
                buffer
                    .cell((WIDTH - 1, y))
                    .map(|cell| cell.symbol().to_string())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_card_height_matches_fixture() {
        let posts = posts(1);
        assert_eq!(post_card::card_height(&posts[0], WIDTH - 1), 4);
    }

    #[test]
    fn test_last_post_selected_scrolls_to_end() {
        let posts = posts(25);
        let mut navigation = NavigationModel::new();
        navigation.selected = Some(24);

        let column = render(&posts, &mut navigation);

        assert_eq!(navigation.scroll_offset, 20);
        assert_eq!(navigation.visible_cards, 5);
        // Thumb reaches the bottom of the track, right above the end arrow
        assert_eq!(column[HEIGHT as usize - 1], "↓");
        assert_eq!(column[HEIGHT as usize - 2], "█");
        assert_eq!(column[1], "│");
    }

    #[test]
    fn test_head_selected_thumb_at_top() {
        let posts = posts(25);
        let mut navigation = NavigationModel::new();
        navigation.selected = Some(0);

        let column = render(&posts, &mut navigation);

        assert_eq!(navigation.scroll_offset, 0);
        assert_eq!(column[0], "↑");
        assert_eq!(column[1], "█");
        assert_eq!(column[HEIGHT as usize - 2], "│");
    }

    #[test]
    fn test_scroll_offset_kept_while_selection_visible() {
        let posts = posts(25);
        let mut navigation = NavigationModel::new();
        navigation.selected = Some(24);
        render(&posts, &mut navigation);

        // Moving up inside the viewport does not scroll
        navigation.selected = Some(22);
        render(&posts, &mut navigation);
        assert_eq!(navigation.scroll_offset, 20);

        // Moving above it scrolls just enough
        navigation.selected = Some(10);
        render(&posts, &mut navigation);
        assert_eq!(navigation.scroll_offset, 10);
    }

    #[test]
    fn test_no_scrollbar_when_everything_fits() {
        let posts = posts(3);
        let mut navigation = NavigationModel::new();
        navigation.selected = Some(2);

        let column = render(&posts, &mut navigation);

        assert_eq!(navigation.visible_cards, 3);
        assert!(column.iter().all(|symbol| symbol != "█" && symbol != "↑"));
    }
}
