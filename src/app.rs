//! Application state for the interactive clock.

use std::time::{Duration, Instant};

use crate::clock::{ClockState, Mode};
use crate::config::{ClockConfig, FaceStyle};
use crate::control::{Command, LoopState};
use crate::ui::Theme;

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Main application state.
///
/// Holds only the user's choices; the time itself is re-read on every draw.
pub struct App {
    state: LoopState,
    last_mode: Mode,
    pub face_style: FaceStyle,
    pub twenty_four_hour: bool,
    pub show_help: bool,
    pub config: ClockConfig,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App from configuration, starting in `mode`.
    pub fn new(config: ClockConfig, mode: Mode, theme: Theme) -> Self {
        Self {
            state: LoopState::Running(mode),
            last_mode: mode,
            face_style: config.face.style,
            twenty_four_hour: config.clock.twenty_four_hour,
            show_help: false,
            config,
            theme,
            status_message: None,
        }
    }

    pub fn running(&self) -> bool {
        self.state.is_running()
    }

    /// Current display mode. After quitting this is the last mode shown.
    pub fn mode(&self) -> Mode {
        self.state.mode().unwrap_or(self.last_mode)
    }

    /// Fresh clock state for this instant.
    pub fn clock_state(&self) -> ClockState {
        ClockState::now(self.mode())
    }

    /// Apply a command to the loop state.
    pub fn apply(&mut self, cmd: Command) {
        self.state = cmd.apply(self.state);
        match self.state.mode() {
            Some(mode) if mode != self.last_mode => {
                tracing::debug!(mode = mode.label(), "mode toggled");
                self.last_mode = mode;
            }
            Some(_) => {}
            None => tracing::debug!("quit requested"),
        }
    }

    /// Flip between analog and digital.
    pub fn toggle_mode(&mut self) {
        self.apply(Command::Toggle);
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.apply(Command::Quit);
    }

    /// Switch the analog face between grid and canvas rendering.
    pub fn cycle_face_style(&mut self) {
        self.face_style = self.face_style.next();
        self.set_status_message(format!("Face style: {}", self.face_style.label()));
    }

    /// Switch the digital display between 12- and 24-hour time.
    pub fn toggle_hour_format(&mut self) {
        self.twenty_four_hour = !self.twenty_four_hour;
        let label = if self.twenty_four_hour { "24-hour" } else { "12-hour" };
        self.set_status_message(format!("Time format: {}", label));
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_TTL {
                return Some(msg);
            }
        }
        None
    }
}
