use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use chirptui::config::ProfileConfig;
use chirptui::feed::{Author, Post};
use chirptui::logic::formatting::format_count;
use chirptui::model::NavigationModel;
use chirptui::ProfileTab;

use super::theme::{gradient_color, Palette, GRADIENT_END, GRADIENT_START};
use super::timeline;

const COVER_HEIGHT: u16 = 3;

/// "5 posts" / "1 post"
pub fn post_count_label(count: usize) -> String {
    if count == 1 {
        "1 post".to_string()
    } else {
        format!("{} posts", count)
    }
}

fn empty_tab_message(tab: ProfileTab) -> &'static str {
    match tab {
        ProfileTab::Posts => "You haven't posted yet",
        ProfileTab::Replies => "No replies yet",
        ProfileTab::Media => "No media yet",
        ProfileTab::Likes => "No likes yet",
    }
}

fn cover_lines(width: u16, height: u16) -> Vec<Line<'static>> {
    let row: Vec<Span> = (0..width)
        .map(|x| {
            let t = if width > 1 { x as f32 / (width - 1) as f32 } else { 0.0 };
            Span::styled(
                " ",
                Style::default().bg(gradient_color(GRADIENT_START, GRADIENT_END, t)),
            )
        })
        .collect();
    (0..height).map(|_| Line::from(row.clone())).collect()
}

/// Render the logged-in user's profile
pub fn render_profile(
    f: &mut Frame,
    area: Rect,
    profile: &ProfileConfig,
    author: &Author,
    post_count: usize,
    own_posts: &[Post],
    navigation: &mut NavigationModel,
    tab: ProfileTab,
    palette: &Palette,
) {
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Name and post count
            Constraint::Length(COVER_HEIGHT), // Cover band
            Constraint::Length(1),            // Avatar and edit button
            Constraint::Length(5),            // Identity and stats
            Constraint::Length(2),            // Tabs
            Constraint::Min(0),               // Tab content
        ])
        .split(area);

    let muted = Style::default().fg(palette.muted);
    let text = Style::default().fg(palette.text);
    let bold = text.add_modifier(Modifier::BOLD);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(author.display_name.clone(), bold),
            Span::styled(format!("  {}", post_count_label(post_count)), muted),
        ])),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(cover_lines(chunks[1].width, chunks[1].height)),
        chunks[1],
    );

    let avatar_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(20)])
        .split(chunks[2]);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("( {} )", author.initials()),
            Style::default()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        avatar_row[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled("[ Edit profile ] e", text)).alignment(Alignment::Right),
        avatar_row[1],
    );

    let identity = vec![
        Line::from(Span::styled(author.display_name.clone(), bold)),
        Line::from(Span::styled(author.at_handle(), muted)),
        Line::from(Span::styled(profile.bio.clone(), text)),
        Line::from(vec![
            Span::styled(format!("⌖ {}", profile.location), muted),
            Span::styled(format!("   ▦ Joined {}", profile.joined), muted),
        ]),
        Line::from(vec![
            Span::styled(format_count(profile.following as u64), bold),
            Span::styled(" Following   ", muted),
            Span::styled(format_count(profile.followers as u64), bold),
            Span::styled(" Followers", muted),
        ]),
    ];
    f.render_widget(Paragraph::new(identity), chunks[3]);

    let tabs = Tabs::new(ProfileTab::ALL.iter().map(|t| t.as_str().to_string()))
        .select(tab.index())
        .style(muted)
        .highlight_style(
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.outline)),
        );
    f.render_widget(tabs, chunks[4]);

    match tab {
        ProfileTab::Posts => {
            timeline::render_post_list(
                f,
                chunks[5],
                own_posts,
                navigation,
                palette,
                empty_tab_message(tab),
            );
        }
        _ => {
            f.render_widget(
                Paragraph::new(Span::styled(empty_tab_message(tab), muted))
                    .alignment(Alignment::Center),
                chunks[5],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_count_label() {
        assert_eq!(post_count_label(0), "0 posts");
        assert_eq!(post_count_label(1), "1 post");
        assert_eq!(post_count_label(5), "5 posts");
    }

    #[test]
    fn test_cover_runs_across_gradient() {
        let lines = cover_lines(10, COVER_HEIGHT);
        assert_eq!(lines.len(), 3);
        let first = lines[0].spans.first().unwrap().style.bg;
        let last = lines[0].spans.last().unwrap().style.bg;
        assert_eq!(first, Some(gradient_color(GRADIENT_START, GRADIENT_END, 0.0)));
        assert_eq!(last, Some(gradient_color(GRADIENT_START, GRADIENT_END, 1.0)));
    }
}
