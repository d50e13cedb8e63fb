//! User commands and the sources that deliver them to the render loop.
//!
//! The render loop never blocks on input: it polls a [`CommandSource`] once
//! per iteration and applies whatever arrived to its [`LoopState`]. Commands
//! are produced elsewhere (a stdin listener thread, a key handler, a test)
//! and travel over an explicit channel instead of shared globals.
//!
//! ```
//! use termclock::clock::Mode;
//! use termclock::control::{ChannelSource, Command, CommandSource, LoopState};
//!
//! let (tx, mut source) = ChannelSource::create("test");
//! let mut state = LoopState::Running(Mode::Analog);
//!
//! tx.send(Command::Toggle).unwrap();
//! while let Some(cmd) = source.poll() {
//!     state = cmd.apply(state);
//! }
//! assert_eq!(state, LoopState::Running(Mode::Digital));
//! ```

mod channel;
mod shutdown;
mod stdin;

pub use channel::{ChannelSource, CommandSender};
pub use shutdown::ShutdownFlag;
pub use stdin::spawn_line_listener;

use std::fmt::Debug;

use crate::clock::Mode;

/// A request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip between analog and digital.
    Toggle,
    /// Stop the render loop.
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// `t` toggles and `q` quits, ignoring case and surrounding whitespace.
    /// Empty lines and anything unrecognised yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "t" => Some(Command::Toggle),
            "q" => Some(Command::Quit),
            "" => None,
            other => {
                tracing::debug!(input = other, "ignoring unrecognised command");
                None
            }
        }
    }

    /// Advance the loop state machine.
    pub fn apply(self, state: LoopState) -> LoopState {
        match (self, state) {
            (_, LoopState::Stopped) => LoopState::Stopped,
            (Command::Toggle, LoopState::Running(mode)) => LoopState::Running(mode.toggle()),
            (Command::Quit, LoopState::Running(_)) => LoopState::Stopped,
        }
    }
}

/// State of a render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running(Mode),
    /// Terminal: nothing leaves this state.
    Stopped,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running(_))
    }

    /// Current mode, `None` once stopped.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            LoopState::Running(mode) => Some(*mode),
            LoopState::Stopped => None,
        }
    }
}

/// Source of pending commands for a render loop.
pub trait CommandSource: Send + Debug {
    /// Take the next pending command without blocking.
    ///
    /// Returns `None` when nothing is pending.
    fn poll(&mut self) -> Option<Command>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Whether the source can never yield another command.
    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(Command::parse_line("t"), Some(Command::Toggle));
        assert_eq!(Command::parse_line("T\n"), Some(Command::Toggle));
        assert_eq!(Command::parse_line("  q "), Some(Command::Quit));
        assert_eq!(Command::parse_line(""), None);
        assert_eq!(Command::parse_line("\n"), None);
        assert_eq!(Command::parse_line("toggle"), None);
    }

    #[test]
    fn test_state_machine() {
        let start = LoopState::Running(Mode::Analog);
        let toggled = Command::Toggle.apply(start);
        assert_eq!(toggled.mode(), Some(Mode::Digital));
        assert_eq!(Command::Toggle.apply(toggled), start);

        let stopped = Command::Quit.apply(toggled);
        assert!(!stopped.is_running());
        assert_eq!(stopped.mode(), None);
        assert_eq!(Command::Toggle.apply(stopped), LoopState::Stopped);
    }
}
