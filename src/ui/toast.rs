use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Palette;

/// Icon and accent color for a toast, picked from its prefix
fn toast_accent(message: &str, palette: &Palette) -> (&'static str, Color) {
    if message.starts_with("Error:") {
        ("✗ ", palette.error)
    } else if message.starts_with("Info:") {
        ("ℹ ", palette.info)
    } else {
        ("✓ ", palette.success)
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let max_width = (area.width as usize).min(80); // Max 80 chars wide
    let toast_width = (message.width() + 6).min(max_width) as u16;
    let toast_height = 3;

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = 3; // Just below the top bar

    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height.min(area.height.saturating_sub(toast_y)),
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, accent) = toast_accent(message, palette);

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default().fg(palette.text)),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(palette.surface));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirptui::ThemeMode;

    #[test]
    fn test_toast_accent_by_prefix() {
        let palette = Palette::for_mode(ThemeMode::Light);
        assert_eq!(toast_accent("Error: nope", &palette), ("✗ ", palette.error));
        assert_eq!(toast_accent("Info: later", &palette), ("ℹ ", palette.info));
        assert_eq!(toast_accent("Post published", &palette), ("✓ ", palette.success));
    }
}
