//! Line-oriented input listener.

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use super::{Command, CommandSender};

/// Spawn a thread that reads lines from `reader` and forwards commands.
///
/// End of input and read errors are treated as an implicit quit. Lines that
/// are not valid UTF-8 are decoded lossily and end up ignored like any other
/// unknown input. The thread also exits after forwarding a quit or once the
/// receiving side is gone.
pub fn spawn_line_listener<R>(reader: R, sender: CommandSender) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("input-listener".to_string())
        .spawn(move || listen(reader, sender))
}

fn listen<R: BufRead>(mut reader: R, sender: CommandSender) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let cmd = match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                tracing::info!("input closed, stopping");
                Command::Quit
            }
            Ok(_) => match Command::parse_line(&String::from_utf8_lossy(&buf)) {
                Some(cmd) => cmd,
                None => continue,
            },
            Err(e) => {
                tracing::warn!(error = %e, "input read failed, stopping");
                Command::Quit
            }
        };

        tracing::debug!(?cmd, "command received");
        if sender.send(cmd).is_err() || cmd == Command::Quit {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ChannelSource, CommandSource};
    use std::io::{self, BufReader, Cursor, Read};

    /// Reader that fails every call.
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    fn drain(source: &mut ChannelSource) -> Vec<Command> {
        std::iter::from_fn(|| source.poll()).collect()
    }

    #[test]
    fn test_lines_become_commands() {
        let (tx, mut source) = ChannelSource::create("test");
        let input = Cursor::new(b"t\n\nhello\nT\nq\nt\n".to_vec());
        spawn_line_listener(input, tx).unwrap().join().unwrap();

        // Stops at the first quit, skips blanks and noise
        assert_eq!(
            drain(&mut source),
            vec![Command::Toggle, Command::Toggle, Command::Quit]
        );
    }

    #[test]
    fn test_eof_is_quit() {
        let (tx, mut source) = ChannelSource::create("test");
        spawn_line_listener(Cursor::new(b"t\n".to_vec()), tx).unwrap().join().unwrap();
        assert_eq!(drain(&mut source), vec![Command::Toggle, Command::Quit]);
    }

    #[test]
    fn test_invalid_utf8_line_is_ignored() {
        let (tx, mut source) = ChannelSource::create("test");
        let input = Cursor::new(b"\xff\xfe\nt\n".to_vec());
        spawn_line_listener(input, tx).unwrap().join().unwrap();
        assert_eq!(drain(&mut source), vec![Command::Toggle, Command::Quit]);
    }

    #[test]
    fn test_read_error_is_quit() {
        let (tx, mut source) = ChannelSource::create("test");
        spawn_line_listener(BufReader::new(Broken), tx).unwrap().join().unwrap();
        assert_eq!(drain(&mut source), vec![Command::Quit]);
    }

    #[test]
    fn test_receiver_gone() {
        let (tx, source) = ChannelSource::create("test");
        drop(source);
        // Must return rather than spin
        spawn_line_listener(Cursor::new(b"t\nt\n".to_vec()), tx).unwrap().join().unwrap();
    }
}
