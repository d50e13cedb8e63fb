//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::clock::Hand;
use crate::config::ThemeChoice;
use crate::render::Stroke;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and the active mode.
    pub highlight: Color,
    /// Clock ring and tick marks.
    pub face: Color,
    /// Hour labels on the dial.
    pub numerals: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    /// Big-text digits in digital mode.
    pub digits: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for titles.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            face: Color::Gray,
            numerals: Color::White,
            hour_hand: Color::Cyan,
            minute_hand: Color::LightBlue,
            second_hand: Color::Red,
            digits: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            face: Color::DarkGray,
            numerals: Color::Black,
            hour_hand: Color::Blue,
            minute_hand: Color::Magenta,
            second_hand: Color::Red,
            digits: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    pub fn hand_color(&self, hand: Hand) -> Color {
        match hand {
            Hand::Hour => self.hour_hand,
            Hand::Minute => self.minute_hand,
            Hand::Second => self.second_hand,
        }
    }

    /// Color for a vector stroke.
    pub fn stroke_color(&self, stroke: Stroke) -> Color {
        match stroke {
            Stroke::Face | Stroke::Tick => self.face,
            Stroke::Hand(hand) => self.hand_color(hand),
            Stroke::Pivot => self.highlight,
        }
    }
}
