use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use chirptui::feed::Post;
use chirptui::logic::{compose as draft, formatting::format_count};
use chirptui::model::{ComposeField, ComposeState, PostDetailState};

use super::layout::centered_rect;
use super::theme::{gradient_color, Palette, GRADIENT_END, GRADIENT_START};
use crate::ImagePreviewState;

const COMPOSE_PLACEHOLDER: &str = "What's happening?";
const PICKER_PLACEHOLDER: &str = "Select image: file path, URL or asset name";

/// Style of the "Post" button; muted while the draft is blank
fn post_button_style(enabled: bool, palette: &Palette) -> Style {
    if enabled {
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted).bg(palette.outline)
    }
}

fn field_border(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.outline)
    }
}

/// Status line under the picker input
fn attachment_status(compose: &ComposeState) -> String {
    match compose.attachment() {
        Some(attachment) => format!(
            "Image selected: {} ({})  Ctrl+X: Remove",
            attachment.label(),
            attachment.kind()
        ),
        None => "No image".to_string(),
    }
}

/// Render the compose dialog
pub fn render_compose_dialog(f: &mut Frame, compose: &ComposeState, palette: &Palette) {
    let area = centered_rect(70, 20, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New post ")
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Cancel / Post
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Character counter
            Constraint::Length(3), // Picker input
            Constraint::Length(1), // Picker status
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let can_post = compose.can_post();
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(10)])
        .split(chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled("Esc: Cancel", Style::default().fg(palette.muted))),
        header[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(" Post ", post_button_style(can_post, palette)))
            .alignment(Alignment::Right),
        header[1],
    );

    let body_focused = compose.field == ComposeField::Body;
    let body = if compose.body.is_empty() {
        Paragraph::new(Span::styled(
            COMPOSE_PLACEHOLDER,
            Style::default().fg(palette.muted),
        ))
    } else {
        let mut text = compose.body.clone();
        if body_focused {
            text.push('▏');
        }
        Paragraph::new(text).wrap(Wrap { trim: false })
    };
    f.render_widget(
        body.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(body_focused, palette)),
        ),
        chunks[1],
    );

    let counter_style = if draft::is_over_limit(&compose.body) {
        Style::default().fg(palette.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            draft::format_char_counter(&compose.body),
            counter_style,
        ))
        .alignment(Alignment::Right),
        chunks[2],
    );

    let picker_focused = compose.field == ComposeField::Attachment;
    let picker = if compose.attachment_input.is_empty() {
        Paragraph::new(Span::styled(
            PICKER_PLACEHOLDER,
            Style::default().fg(palette.muted),
        ))
    } else {
        Paragraph::new(compose.attachment_input.clone())
    };
    f.render_widget(
        picker.block(
            Block::default()
                .borders(Borders::ALL)
                .title("🖼 Image")
                .border_style(field_border(picker_focused, palette)),
        ),
        chunks[3],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            attachment_status(compose),
            Style::default().fg(palette.primary),
        )),
        chunks[4],
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(palette.primary)),
            Span::raw(":Switch field  "),
            Span::styled("^S", Style::default().fg(palette.primary)),
            Span::raw(":Post  "),
            Span::styled("Enter", Style::default().fg(palette.primary)),
            Span::raw(":Newline"),
        ]))
        .style(Style::default().fg(palette.muted)),
        chunks[5],
    );
}

/// Full counters for the detail view ("3 replies · 12 reposts · 1.2K likes")
fn detail_counts(post: &Post) -> String {
    format!(
        "{} replies · {} reposts · {} likes",
        format_count(post.reply_count as u64),
        format_count(post.repost_count as u64),
        format_count(post.like_count as u64)
    )
}

/// Render the post detail popup with its attachment preview
pub fn render_post_detail(
    f: &mut Frame,
    post: &Post,
    state: &PostDetailState,
    image_state: Option<&mut ImagePreviewState>,
    palette: &Palette,
) {
    let screen = f.area();
    let area = centered_rect(
        (screen.width * 4 / 5).max(40),
        (screen.height * 4 / 5).max(12),
        screen,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Post ")
        .title_bottom(" Esc: Close  ↑↓: Scroll ")
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let muted = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                post.author.display_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", post.author.at_handle()), muted),
        ]),
        Line::from(Span::styled(post.posted_at.clone(), muted)),
        Line::from(""),
    ];
    lines.extend(post.body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(detail_counts(post), muted)));

    let Some(attachment) = &post.attachment else {
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((state.scroll_offset, 0)),
            inner,
        );
        return;
    };

    let image_rows = (inner.height / 2).max(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(image_rows)])
        .split(inner);

    lines.push(Line::from(Span::styled(
        format!("🖼  {} ({})", attachment.label(), attachment.kind()),
        Style::default().fg(palette.primary),
    )));
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((state.scroll_offset, 0)),
        chunks[0],
    );

    match image_state {
        Some(ImagePreviewState::Ready { protocol, metadata }) => {
            let image_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(chunks[1]);
            f.render_stateful_widget(StatefulImage::default(), image_chunks[0], protocol);

            let mut info = Vec::new();
            if let Some((w, h)) = metadata.dimensions {
                info.push(format!("{}x{}", w, h));
            }
            if let Some(format) = &metadata.format {
                info.push(format.clone());
            }
            info.push(crate::utils::format_bytes(metadata.file_size));
            f.render_widget(
                Paragraph::new(Span::styled(info.join(" · "), muted)),
                image_chunks[1],
            );
        }
        Some(ImagePreviewState::Loading) => {
            f.render_widget(
                Paragraph::new(Span::styled("Loading image...", muted))
                    .alignment(Alignment::Center),
                chunks[1],
            );
        }
        Some(ImagePreviewState::Unavailable { reason }) => {
            render_image_placeholder(f, chunks[1], reason);
        }
        None => render_image_placeholder(f, chunks[1], "Image"),
    }
}

/// Gradient box standing in for an image that cannot be shown
fn render_image_placeholder(f: &mut Frame, area: Rect, note: &str) {
    let middle = area.height / 2;
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let t = if area.height > 1 {
                row as f32 / (area.height - 1) as f32
            } else {
                0.0
            };
            let style = Style::default()
                .bg(gradient_color(GRADIENT_START, GRADIENT_END, t))
                .fg(ratatui::style::Color::White);
            let text = if row == middle {
                format!("🖼  {}", note)
            } else {
                String::new()
            };
            Line::from(Span::styled(
                format!("{:^width$}", text, width = area.width as usize),
                style,
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirptui::feed::{Author, PostId};
    use chirptui::ThemeMode;

    #[test]
    fn test_post_button_disabled_when_blank() {
        let palette = Palette::for_mode(ThemeMode::Light);
        let enabled = post_button_style(true, &palette);
        let disabled = post_button_style(false, &palette);
        assert_eq!(enabled.bg, Some(palette.primary));
        assert_ne!(disabled.bg, Some(palette.primary));
    }

    #[test]
    fn test_attachment_status() {
        let mut compose = ComposeState::default();
        assert_eq!(attachment_status(&compose), "No image");

        compose.attachment_input = "/tmp/cat.png".to_string();
        assert!(attachment_status(&compose).starts_with("Image selected: cat.png (device)"));
    }

    #[test]
    fn test_detail_counts_use_compact_format() {
        let post = Post {
            id: PostId(1),
            author: Author::new("A", "a"),
            body: "hi".to_string(),
            posted_at: "1h".to_string(),
            reply_count: 0,
            repost_count: 12,
            like_count: 2_500_000,
            attachment: None,
        };
        assert_eq!(detail_counts(&post), "0 replies · 12 reposts · 2.5M likes");
    }
}
