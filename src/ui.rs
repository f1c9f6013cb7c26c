use ratatui::{prelude::*, widgets::*};

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Place the terminal cursor inside a bordered single-line input.
/// `byte_pos` is a byte offset into `content`.
pub fn set_input_cursor(f: &mut Frame, area: Rect, content: &str, byte_pos: usize) {
    let cursor_x = input_cursor_x(area, content, byte_pos);
    f.set_cursor_position(Position::new(cursor_x, area.y.saturating_add(1)));
}

/// Terminal column for the cursor, clamped to the inside of the border
pub fn input_cursor_x(area: Rect, content: &str, byte_pos: usize) -> u16 {
    let column = content
        .get(..byte_pos)
        .map(|s| s.chars().count())
        .unwrap_or(0);
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(column).saturating_add(1).min(max_x)
}

/// Rating color, for ratings that parse as a number on a 0-10 scale
pub fn rating_color(rating: &str) -> Color {
    match rating.trim().replace(',', ".").parse::<f32>() {
        Ok(r) if r >= 8.0 => Color::Green,
        Ok(r) if r >= 5.0 => Color::Yellow,
        Ok(_) => Color::Red,
        Err(_) => Color::Gray,
    }
}

/// A rectangle centered in `r`, sized in percent
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rectangle of fixed height centered in `r`, `percent_x` wide
pub fn centered_fixed(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let y = r.y + (r.height - height) / 2;
    let band = Rect::new(r.x, y, r.width, height);
    centered_rect(percent_x, 100, band)
}
