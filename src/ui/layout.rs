use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top app bar (logo and theme indicator)
    pub top_area: Rect,
    /// Timeline or profile content
    pub content_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom navigation bar
    pub nav_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Top bar (border, text, border)
            Constraint::Min(3),                // Content area
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Bottom navigation bar
        ])
        .split(terminal_size);

    LayoutInfo {
        top_area: main_chunks[0],
        content_area: main_chunks[1],
        legend_area: main_chunks[2],
        nav_area: main_chunks[3],
    }
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Split off a one-column scrollbar track on the right edge
pub fn split_scrollbar(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}
