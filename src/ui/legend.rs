use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chirptui::Screen;

use super::theme::Palette;

fn key<'a>(label: &'a str, palette: &Palette) -> Span<'a> {
    Span::styled(label, Style::default().fg(palette.primary))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, screen: Screen, palette: &Palette) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match screen {
        Screen::Timeline => {
            if vim_mode {
                hotkey_spans.extend(vec![
                    key("j/k", palette),
                    Span::raw(":Nav  "),
                    key("gg/G", palette),
                    Span::raw(":Newest/Oldest  "),
                    key("^d/^u", palette),
                    Span::raw(":½Page  "),
                ]);
            } else {
                hotkey_spans.extend(vec![
                    key("↑/↓", palette),
                    Span::raw(":Nav  "),
                    key("g/End", palette),
                    Span::raw(":Newest/Oldest  "),
                    key("PgUp/PgDn", palette),
                    Span::raw(":Page  "),
                ]);
            }
            hotkey_spans.extend(vec![
                key("Enter", palette),
                Span::raw(":Open  "),
                key("p", palette),
                Span::raw(":Profile  "),
            ]);
        }
        Screen::Profile => {
            let tab_keys = if vim_mode { "h/l" } else { "←/→" };
            let nav_keys = if vim_mode { "j/k" } else { "↑/↓" };
            hotkey_spans.extend(vec![
                key(nav_keys, palette),
                Span::raw(":Nav  "),
                key("Enter", palette),
                Span::raw(":Open  "),
                key(tab_keys, palette),
                Span::raw(":Tabs  "),
                key("e", palette),
                Span::raw(":Edit profile  "),
                key("Esc", palette),
                Span::raw(":Back  "),
            ]);
        }
    }

    hotkey_spans.extend(vec![
        key("n", palette),
        Span::raw(":Post  "),
        key("t", palette),
        Span::raw(":Theme  "),
        key("/", palette),
        Span::raw(":Search  "),
        key("q", palette),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    screen: Screen,
    palette: &Palette,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, screen, palette));

    Paragraph::new(vec![hotkey_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hotkeys")
                .border_style(Style::default().fg(palette.outline)),
        )
        .style(Style::default().fg(palette.muted).bg(palette.background))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend for the current screen
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, screen: Screen, palette: &Palette) {
    f.render_widget(build_legend_paragraph(vim_mode, screen, palette), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    screen: Screen,
    palette: &Palette,
) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, screen, palette));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirptui::ThemeMode;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    fn palette() -> Palette {
        Palette::for_mode(ThemeMode::Light)
    }

    #[test]
    fn test_timeline_legend_arrow_keys() {
        let text = spans_to_text(&build_hotkey_spans(false, Screen::Timeline, &palette()));
        assert!(text.contains("↑/↓:Nav"), "got: {}", text);
        assert!(text.contains("Enter:Open"), "got: {}", text);
        assert!(!text.contains("gg/G"), "got: {}", text);
    }

    #[test]
    fn test_timeline_legend_vim_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, Screen::Timeline, &palette()));
        assert!(text.contains("j/k:Nav"), "got: {}", text);
        assert!(text.contains("gg/G:Newest/Oldest"), "got: {}", text);
    }

    #[test]
    fn test_profile_legend() {
        let text = spans_to_text(&build_hotkey_spans(false, Screen::Profile, &palette()));
        assert!(text.contains("e:Edit profile"), "got: {}", text);
        assert!(text.contains("Esc:Back"), "got: {}", text);
        assert!(text.contains("↑/↓:Nav"), "got: {}", text);
        assert!(text.contains("Enter:Open"), "got: {}", text);
    }

    #[test]
    fn test_global_keys_on_every_screen() {
        for screen in [Screen::Timeline, Screen::Profile] {
            let text = spans_to_text(&build_hotkey_spans(false, screen, &palette()));
            assert!(text.contains("n:Post"));
            assert!(text.contains("t:Theme"));
            assert!(text.ends_with("q:Quit"));
        }
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, false, Screen::Timeline, &palette());
        let narrow = calculate_legend_height(30, false, Screen::Timeline, &palette());
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
