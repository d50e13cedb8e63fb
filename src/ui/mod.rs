//! Terminal UI rendering using ratatui.
//!
//! Each display mode is implemented in its own submodule with a `render`
//! function.
//!
//! ## Submodules
//!
//! - [`analog`]: Clock face as a character grid or a braille canvas
//! - [`digital`]: Big-text time with date
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop in `main.rs` calls [`draw`] once per tick:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Clock                                │
//! │ (analog/digital::render)             │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod analog;
pub mod common;
pub mod digital;
pub mod theme;

pub use theme::Theme;

use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::clock::{ClockState, Mode};

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 10;

/// Draw one full frame for the current instant.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        common::render_too_small(frame, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(4),    // Clock
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let now = Local::now().naive_local();
    let state = ClockState::from_time(&now, app.mode());

    common::render_header(frame, app, &now, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match state.mode {
        Mode::Analog => analog::render(frame, app, &state, chunks[2]),
        Mode::Digital => digital::render(frame, app, &now, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
