use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use chirptui::feed::Post;
use chirptui::logic::formatting::action_count_label;

use super::theme::Palette;

/// Columns taken by the avatar badge; body lines are indented to match
pub const AVATAR_WIDTH: usize = 5;

/// Wrap text to `width` display columns
///
/// Explicit newlines are kept, words are broken only when a single word is
/// wider than the line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Hard-break words longer than a whole line
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if current_width + char_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += char_width;
            }
        }

        lines.push(current);
    }

    lines
}

fn avatar_badge(post: &Post) -> String {
    format!("({:^2}) ", post.author.initials())
}

fn action_slot(icon: &str, count: u32) -> String {
    match action_count_label(count) {
        Some(label) => format!("{} {:<8}", icon, label),
        None => format!("{:<11}", icon),
    }
}

/// Plain text of the action bar ("💬 3   🔁 12   ♡ 1.2K   ↗")
pub fn action_bar_text(post: &Post) -> String {
    format!(
        "{}{}{}↗",
        action_slot("💬", post.reply_count),
        action_slot("🔁", post.repost_count),
        action_slot("♡", post.like_count)
    )
}

/// Lines of one timeline card, divider included
pub fn build_post_card(post: &Post, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let indent = " ".repeat(AVATAR_WIDTH);
    let body_width = (width as usize).saturating_sub(AVATAR_WIDTH);
    let muted = Style::default().fg(palette.muted);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            avatar_badge(post),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            post.author.display_name.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} · {}", post.author.at_handle(), post.posted_at), muted),
    ])];

    for body_line in wrap_text(&post.body, body_width) {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(body_line, Style::default().fg(palette.text)),
        ]));
    }

    if let Some(attachment) = &post.attachment {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(format!("🖼  {}", attachment.label()), Style::default().fg(palette.primary)),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(action_bar_text(post), muted),
    ]));

    lines.push(Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(palette.outline),
    )));

    lines
}

/// Rendered height of a card at `width`
pub fn card_height(post: &Post, width: u16) -> u16 {
    let body_width = (width as usize).saturating_sub(AVATAR_WIDTH);
    let body_lines = wrap_text(&post.body, body_width).len();
    let attachment_lines = usize::from(post.attachment.is_some());
    // Header, action bar and divider
    (body_lines + attachment_lines + 3).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirptui::feed::{AttachmentRef, Author, PostId};
    use chirptui::ThemeMode;

    fn post(body: &str) -> Post {
        Post {
            id: PostId(1),
            author: Author::new("Tevin Muchiri", "tevin_muchiri"),
            body: body.to_string(),
            posted_at: "2h".to_string(),
            reply_count: 3,
            repost_count: 0,
            like_count: 1250,
            attachment: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_at_word_boundary() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_counts_wide_chars() {
        // Each emoji takes two columns
        assert_eq!(wrap_text("🔥🔥🔥", 4), vec!["🔥🔥", "🔥"]);
    }

    #[test]
    fn test_action_bar_hides_zero_counts() {
        let text = action_bar_text(&post("hi"));
        assert!(text.starts_with("💬 3"));
        assert!(text.contains("♡ 1.3K"));
        assert!(!text.contains("🔁 0"));
        assert!(text.ends_with('↗'));
    }

    #[test]
    fn test_card_lines() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let lines = build_post_card(&post("Hello timeline"), 60, &palette);
        assert_eq!(lines.len(), 4);
        assert_eq!(line_text(&lines[0]), "(TM) Tevin Muchiri @tevin_muchiri · 2h");
        assert_eq!(line_text(&lines[1]), "     Hello timeline");
        assert_eq!(lines.len() as u16, card_height(&post("Hello timeline"), 60));
    }

    #[test]
    fn test_card_with_attachment() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        let mut p = post("Look at this");
        p.attachment = Some(AttachmentRef::Bundled("sunset".to_string()));
        let lines = build_post_card(&p, 40, &palette);
        assert_eq!(lines.len(), 5);
        assert!(line_text(&lines[2]).contains("sunset"));
        assert_eq!(card_height(&p, 40), 5);
    }
}
