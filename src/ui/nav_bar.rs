use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chirptui::Screen;

use super::theme::Palette;

/// Bottom navigation entries with the key that selects them
const NAV_ITEMS: [(&str, &str); 3] = [("1", "⌂ Home"), ("2", "⌕ Search"), ("3", "☺ Profile")];

/// Tab spans with the current screen highlighted; Search is never active
fn build_nav_spans(screen: Screen, palette: &Palette) -> Vec<Span<'static>> {
    let active_idx = match screen {
        Screen::Timeline => 0,
        Screen::Profile => 2,
    };

    let mut spans = Vec::new();
    for (idx, (key, label)) in NAV_ITEMS.iter().enumerate() {
        let label_style = if idx == active_idx {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!("{}:", key), Style::default().fg(palette.muted)));
        spans.push(Span::styled(label.to_string(), label_style));
        spans.push(Span::raw("    "));
    }

    // Floating "new post" button
    spans.push(Span::styled(
        " ✎ n: Post ",
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    ));
    spans
}

pub fn render_nav_bar(f: &mut Frame, area: Rect, screen: Screen, palette: &Palette) {
    let widget = Paragraph::new(Line::from(build_nav_spans(screen, palette))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.outline))
            .style(Style::default().bg(palette.surface)),
    );
    f.render_widget(widget, area);
}
