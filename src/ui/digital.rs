//! Digital mode rendering.

use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::render::bigtext::{self, banner_width};
use crate::render::text::{meridiem, time_string};

/// Render the big-text time, vertically centred, with the date beneath.
pub fn render(frame: &mut Frame, app: &App, now: &NaiveDateTime, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Digital ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = clock_lines(app, now, inner.width as usize);
    let top_pad = (inner.height as usize).saturating_sub(lines.len()) / 2;
    let mut padded: Vec<Line> = vec![Line::from(""); top_pad];
    padded.extend(lines);

    let paragraph = Paragraph::new(padded).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Banner (or a one-line fallback when it does not fit) plus the date line.
fn clock_lines(app: &App, now: &NaiveDateTime, width: usize) -> Vec<Line<'static>> {
    let time = time_string(now, app.twenty_four_hour);
    let digit_style = Style::default().fg(app.theme.digits).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = if banner_width(&time) <= width {
        bigtext::big_text(&time)
            .into_iter()
            .map(|row| Line::styled(row, digit_style))
            .collect()
    } else {
        vec![Line::styled(time, digit_style)]
    };

    if !app.twenty_four_hour {
        lines.push(Line::styled(meridiem(now), app.theme.header));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        now.format("%A, %B %d, %Y").to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ));
    lines
}
