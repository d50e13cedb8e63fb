//! Channel-based command source.
//!
//! Producers push commands into an unbounded tokio channel; the render loop
//! drains it with `try_recv`, so no async runtime is involved.

use tokio::sync::mpsc::{self, error::TryRecvError};

use super::{Command, CommandSource};

/// Sending half handed to command producers.
pub type CommandSender = mpsc::UnboundedSender<Command>;

/// A command source fed through a channel.
///
/// # Example
///
/// ```
/// use termclock::control::{ChannelSource, Command, CommandSource};
///
/// let (tx, mut source) = ChannelSource::create("stdin");
/// tx.send(Command::Quit).unwrap();
/// assert_eq!(source.poll(), Some(Command::Quit));
/// assert_eq!(source.poll(), None);
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::UnboundedReceiver<Command>,
    description: String,
    /// Set once every sender is gone
    closed: bool,
}

impl ChannelSource {
    pub fn new(receiver: mpsc::UnboundedReceiver<Command>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
            closed: false,
        }
    }

    /// Create a channel pair: the sender for producers, the source for the loop.
    pub fn create(source_description: &str) -> (CommandSender, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(rx, source_description))
    }
}

impl CommandSource for ChannelSource {
    fn poll(&mut self) -> Option<Command> {
        match self.receiver.try_recv() {
            Ok(cmd) => Some(cmd),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.closed {
                    tracing::debug!(source = %self.description, "command channel closed");
                    self.closed = true;
                }
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    /// True once every producer has hung up and the buffer is drained.
    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");
        assert_eq!(source.description(), "channel: test");

        // Nothing pending
        assert!(source.poll().is_none());

        tx.send(Command::Toggle).unwrap();
        tx.send(Command::Toggle).unwrap();

        // Commands are not collapsed
        assert_eq!(source.poll(), Some(Command::Toggle));
        assert_eq!(source.poll(), Some(Command::Toggle));
        assert!(source.poll().is_none());
        assert!(!source.is_closed());
    }

    #[test]
    fn test_closed_channel() {
        let (tx, mut source) = ChannelSource::create("test");
        tx.send(Command::Quit).unwrap();
        drop(tx);

        // Buffered commands still arrive after the sender is gone
        assert_eq!(source.poll(), Some(Command::Quit));
        assert!(source.poll().is_none());
        assert!(source.is_closed());
    }
}
