//! Common UI components shared across modes.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::{MIN_HEIGHT, MIN_WIDTH};
use crate::app::App;
use crate::clock::Mode;

/// Render the header bar with the date and the current face settings.
pub fn render_header(frame: &mut Frame, app: &App, now: &NaiveDateTime, area: Rect) {
    let format = if app.twenty_four_hour { "24h" } else { "12h" };
    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(app.theme.highlight)),
        Span::styled("TERMCLOCK ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(now.format("%A, %B %d %Y").to_string()),
        Span::raw(" │ "),
        Span::styled(
            format!("face:{} {}", app.face_style.label(), format),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing the two modes.
///
/// Highlights the active mode.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![Line::from(" Analog "), Line::from(" Digital ")];

    let selected = match app.mode() {
        Mode::Analog => 0,
        Mode::Digital => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows available controls, or a temporary status message.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.mode() {
        Mode::Analog => "t:digital f:face ?:help q:quit",
        Mode::Digital => "t:analog h:12/24h ?:help q:quit",
    };
    let paragraph = Paragraph::new(format!(" {} mode | {}", app.mode().label(), controls))
        .style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Notice shown instead of the clock when the terminal is too small.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ratatui::style::Color::Yellow));
    let height = area.height.min(2);
    let y = area.y + area.height.saturating_sub(height) / 2;
    frame.render_widget(paragraph, Rect::new(area.x, y, area.width, height));
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the clock.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  t / Space   Toggle analog/digital"),
        Line::from("  f           Grid or canvas face"),
        Line::from("  h           12/24-hour time"),
        Line::from("  ?           This help"),
        Line::from("  q / Esc     Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 11u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
