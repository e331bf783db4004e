//! Shared layout and widgets for the game screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows reserved under the play field for the status and controls lines.
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Narrowest play field kept when the info panel is shown beside it.
const MIN_FIELD_WIDTH: u16 = 30;

/// Where the play field, status bar and info panel go.
pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    /// Zero-width when the terminal is too narrow for a side panel.
    pub info_panel: Rect,
}

/// Draw the outer border and split what's inside it.
///
/// ```text
/// +- Fireflap -----------------------+- Info ----+
/// | play field                       | stats     |
/// | status / controls                |           |
/// +----------------------------------+-----------+
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    split_game_area(inner, info_panel_width)
}

/// Split the bordered interior. The side panel is dropped before the play
/// field gets narrower than `MIN_FIELD_WIDTH`.
pub fn split_game_area(inner: Rect, info_panel_width: u16) -> GameLayout {
    let panel_width = if inner.width >= info_panel_width.saturating_add(MIN_FIELD_WIDTH) {
        info_panel_width
    } else {
        0
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(panel_width)])
        .split(inner);

    let status_height = STATUS_BAR_HEIGHT.min(columns[0].height / 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(status_height)])
        .split(columns[0]);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel: columns[1],
    }
}

/// `[key] action` pairs joined into one styled line.
pub fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Status text on the first row, controls on the second if there's room.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height > 1 && !controls.is_empty() {
        let row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(controls_line(controls)).alignment(Alignment::Center),
            row,
        );
    }
}

/// Render an info panel frame with the " Info " title. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Clear a centred modal box, draw its border and title, and return the
/// inner area.
pub fn render_modal_frame(
    frame: &mut Frame,
    area: Rect,
    width: u16,
    height: u16,
    title: &str,
    color: Color,
) -> Rect {
    let modal_area = centered_rect(area, width, height);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .title(title);

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_info_panel_when_wide() {
        let layout = split_game_area(Rect::new(1, 1, 100, 30), 22);
        assert_eq!(layout.info_panel.width, 22);
        assert_eq!(layout.content.width, 78);
        assert_eq!(layout.status_bar.height, STATUS_BAR_HEIGHT);
        assert_eq!(layout.content.height, 28);
        assert_eq!(layout.status_bar.y, layout.content.bottom());
    }

    #[test]
    fn test_split_drops_info_panel_when_narrow() {
        let layout = split_game_area(Rect::new(0, 0, 40, 20), 22);
        assert_eq!(layout.info_panel.width, 0);
        assert_eq!(layout.content.width, 40);
    }

    #[test]
    fn test_split_tiny_area_leaves_field_rows() {
        let layout = split_game_area(Rect::new(0, 0, 60, 3), 22);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.content.height, 2);
    }

    #[test]
    fn test_controls_line_text() {
        let line = controls_line(&[("[Space]", "Flap"), ("[A]", "Fire")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Space] Flap  [A] Fire");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(5, 5, 20, 8);
        assert_eq!(centered_rect(area, 50, 50), area);
    }
}
