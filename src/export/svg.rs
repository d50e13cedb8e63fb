//! SVG snapshot of the analog face.

use std::fmt::Write;

use crate::clock::ClockState;
use crate::config::PageSection;
use crate::render::{CanvasFace, HandLengths, HandWidths, Shape, Stroke};

/// Serialize the face for `state` as a standalone SVG document.
///
/// A page too small to hold a face yields a document with only the
/// background.
pub fn render_svg(
    state: &ClockState,
    page: &PageSection,
    lengths: HandLengths,
    widths: HandWidths,
) -> String {
    let size = page.size as f64;
    let face = CanvasFace::new(size, size)
        .with_margin(page.margin)
        .with_lengths(lengths)
        .with_widths(widths);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        escape(&page.background)
    );

    let color = escape(&page.foreground);
    for shape in face.shapes(state) {
        match shape {
            Shape::Circle {
                center,
                radius,
                width,
                stroke,
            } => {
                let fill = if stroke == Stroke::Pivot { color.as_str() } else { "none" };
                let _ = writeln!(
                    out,
                    r#"  <circle class="{}" cx="{:.2}" cy="{:.2}" r="{:.2}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
                    class(stroke),
                    center.x,
                    center.y,
                    radius,
                    color,
                    width,
                    fill
                );
            }
            Shape::Line {
                from,
                to,
                width,
                stroke,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <line class="{}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                    class(stroke),
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    color,
                    width
                );
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

fn class(stroke: Stroke) -> &'static str {
    use crate::clock::Hand;
    match stroke {
        Stroke::Face => "face",
        Stroke::Tick => "tick",
        Stroke::Pivot => "pivot",
        Stroke::Hand(Hand::Hour) => "hand hour",
        Stroke::Hand(Hand::Minute) => "hand minute",
        Stroke::Hand(Hand::Second) => "hand second",
    }
}

/// Minimal attribute escaping for user-configured colours.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Mode;

    fn svg(page: &PageSection) -> String {
        render_svg(
            &ClockState::new(3, 0, 0.0, Mode::Analog),
            page,
            HandLengths::default(),
            HandWidths::default(),
        )
    }

    #[test]
    fn test_document_shape() {
        let out = svg(&PageSection::default());
        assert!(out.starts_with("<svg "));
        assert!(out.trim_end().ends_with("</svg>"));
        assert!(out.contains(r##"fill="#0b66ff""##));
        assert_eq!(out.matches("<line ").count(), 12 + 3);
        assert_eq!(out.matches(r#"class="hand "#).count(), 3);
        // Hour hand at 3 o'clock: ends right of centre on the centre row
        assert!(out.contains(r#"class="hand hour" x1="150.00" y1="150.00" x2="217.50" y2="150.00""#));
    }

    #[test]
    fn test_tiny_page_has_no_face() {
        let page = PageSection {
            size: 20,
            ..PageSection::default()
        };
        let out = svg(&page);
        assert!(out.contains("<rect "));
        assert!(!out.contains("<line "));
        assert!(!out.contains("<circle "));
    }

    #[test]
    fn test_colours_are_escaped() {
        let page = PageSection {
            foreground: r#"red" onload="x"#.to_string(),
            ..PageSection::default()
        };
        assert!(!svg(&page).contains(r#"onload="x""#));
    }
}
