use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chirptui::{Screen, ThemeMode};

use super::theme::Palette;

const LOGO: &str = "𝕏";

fn theme_indicator(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "☀ Light",
        ThemeMode::Dark => "☾ Dark",
    }
}

/// Render the top app bar: screen title, logo and the theme toggle
pub fn render_top_bar(
    f: &mut Frame,
    area: Rect,
    screen: Screen,
    theme: ThemeMode,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.outline))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(inner);

    let title = match screen {
        Screen::Timeline => "Home",
        Screen::Profile => "Profile",
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            LOGO,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("t ", Style::default().fg(palette.primary)),
            Span::styled(theme_indicator(theme), Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Right),
        chunks[2],
    );
}
