//! Analog mode rendering.
//!
//! Two face styles share the same kernel: a character grid painted cell by
//! cell, or a braille canvas fed from the vector shape list.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::app::App;
use crate::clock::{project, ClockState};
use crate::config::FaceStyle;
use crate::render::{CanvasFace, CharGrid, FaceGlyphs, GridFace, Shape};
use crate::ui::Theme;

/// Render the analog face into `area`.
pub fn render(frame: &mut Frame, app: &App, state: &ClockState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Analog ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match app.face_style {
        FaceStyle::Grid => render_grid(frame, app, state, inner),
        FaceStyle::Canvas => render_canvas(frame, app, state, inner),
    }
}

fn render_grid(frame: &mut Frame, app: &App, state: &ClockState, area: Rect) {
    let face_cfg = &app.config.face;
    let (width, height) = (area.width as usize, area.height as usize);
    let face = GridFace::centered(width, height, face_cfg.aspect)
        .with_glyphs(face_cfg.glyphs)
        .with_lengths(face_cfg.lengths)
        .with_ring_step(face_cfg.ring_step);

    let mut grid = CharGrid::new(width, height);
    face.stamp(&mut grid, state);

    let lines: Vec<Line> = grid
        .to_lines()
        .into_iter()
        .map(|row| styled_row(&row, &face_cfg.glyphs, &app.theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Color each cell by what it depicts.
fn styled_row(row: &str, glyphs: &FaceGlyphs, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = row
        .chars()
        .map(|ch| {
            let color = cell_color(ch, glyphs, theme);
            Span::styled(ch.to_string(), Style::default().fg(color))
        })
        .collect();
    Line::from(spans)
}

fn cell_color(ch: char, glyphs: &FaceGlyphs, theme: &Theme) -> Color {
    // Hands first: a custom glyph may collide with the ring character
    if ch == glyphs.second {
        theme.second_hand
    } else if ch == glyphs.minute {
        theme.minute_hand
    } else if ch == glyphs.hour {
        theme.hour_hand
    } else if ch == glyphs.center {
        theme.highlight
    } else if ch.is_ascii_digit() {
        theme.numerals
    } else {
        theme.face
    }
}

fn render_canvas(frame: &mut Frame, app: &App, state: &ClockState, area: Rect) {
    // Braille cells are 2x4 dots and about twice as tall as wide, so doubling
    // the vertical extent keeps the face round.
    let width = area.width as f64;
    let height = area.height as f64 * 2.0;
    let face = CanvasFace::new(width, height)
        .with_margin(1.0)
        .with_lengths(app.config.face.lengths)
        .with_widths(app.config.face.widths);
    let shapes = face.shapes(state);
    let labels = hour_labels(&face);
    let theme = &app.theme;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Canvas y grows upward; shapes use screen coordinates
            for shape in &shapes {
                match shape {
                    Shape::Circle {
                        center,
                        radius,
                        stroke,
                        ..
                    } => ctx.draw(&Circle {
                        x: center.x,
                        y: height - center.y,
                        radius: *radius,
                        color: theme.stroke_color(*stroke),
                    }),
                    Shape::Line { from, to, stroke, .. } => ctx.draw(&CanvasLine {
                        x1: from.x,
                        y1: height - from.y,
                        x2: to.x,
                        y2: height - to.y,
                        color: theme.stroke_color(*stroke),
                    }),
                }
            }
            ctx.layer();
            for (x, y, label) in &labels {
                ctx.print(
                    *x,
                    height - *y,
                    Span::styled(*label, Style::default().fg(theme.numerals)),
                );
            }
        });
    frame.render_widget(canvas, area);
}

/// Hour numerals placed just inside the tick marks.
fn hour_labels(face: &CanvasFace) -> Vec<(f64, f64, &'static str)> {
    const LABELS: [&str; 4] = ["12", "3", "6", "9"];
    let radius = face.radius();
    if radius < 6.0 {
        return Vec::new();
    }
    LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let p = project(face.center(), i as f64 * 90.0, radius * 0.7);
            (p.x - label.len() as f64 / 2.0, p.y, *label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_colors() {
        let theme = Theme::dark();
        let glyphs = FaceGlyphs::default();
        assert_eq!(cell_color('S', &glyphs, &theme), theme.second_hand);
        assert_eq!(cell_color('H', &glyphs, &theme), theme.hour_hand);
        assert_eq!(cell_color('7', &glyphs, &theme), theme.numerals);
        assert_eq!(cell_color('●', &glyphs, &theme), theme.highlight);
        assert_eq!(cell_color(' ', &glyphs, &theme), theme.face);
    }

    #[test]
    fn test_labels_skipped_on_small_faces() {
        assert!(hour_labels(&CanvasFace::new(10.0, 10.0).with_margin(1.0)).is_empty());
        assert_eq!(hour_labels(&CanvasFace::new(80.0, 40.0).with_margin(1.0)).len(), 4);
    }
}
