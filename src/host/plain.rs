//! Plain terminal host: whole-screen repaint with line commands on stdin.
//!
//! Unlike the interactive UI this never enters raw mode, so it works on
//! dumb terminals and through pipes. The screen is cleared with control
//! sequences, never by spawning a shell.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::clock::Mode;
use crate::config::ClockConfig;
use crate::control::{CommandSource, LoopState, ShutdownFlag};
use crate::error::Result;
use crate::render::text::frame_lines;
use crate::render::GridFace;

/// Printed after the loop stops.
pub const GOODBYE: &str = "Clock stopped. Goodbye!";

/// A surface that shows whole frames.
pub trait Display {
    /// Blank the surface and home the cursor.
    fn clear(&mut self) -> std::io::Result<()>;

    /// Show `lines` from the current cursor position.
    fn present(&mut self, lines: &[String]) -> std::io::Result<()>;
}

/// [`Display`] over any writer, usually stdout.
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    fn present(&mut self, lines: &[String]) -> std::io::Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

/// Everything the plain loop needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct PlainSettings {
    pub start_mode: Mode,
    /// Time between repaints.
    pub tick: Duration,
    /// Time between command polls.
    pub poll: Duration,
    pub face: GridFace,
    pub width: usize,
    pub height: usize,
    pub twenty_four_hour: bool,
}

impl PlainSettings {
    pub fn from_config(config: &ClockConfig, start_mode: Mode) -> Self {
        let face_cfg = &config.face;
        let face = GridFace::centered(face_cfg.width, face_cfg.height, face_cfg.aspect)
            .with_glyphs(face_cfg.glyphs)
            .with_lengths(face_cfg.lengths)
            .with_ring_step(face_cfg.ring_step);
        Self {
            start_mode,
            tick: config.refresh.tick(),
            poll: config.refresh.poll(),
            face,
            width: face_cfg.width,
            height: face_cfg.height,
            twenty_four_hour: config.clock.twenty_four_hour,
        }
    }
}

/// Run until a quit command, an interrupt or a closed command source, then
/// reset the screen.
///
/// `now` supplies the wall clock for each frame. Toggling repaints
/// immediately; otherwise frames are spaced by `settings.tick`.
pub fn run_plain<D, N>(
    display: &mut D,
    source: &mut dyn CommandSource,
    shutdown: &ShutdownFlag,
    settings: &PlainSettings,
    mut now: N,
) -> Result<()>
where
    D: Display,
    N: FnMut() -> NaiveDateTime,
{
    tracing::info!(
        source = source.description(),
        mode = settings.start_mode.label(),
        "plain clock started"
    );

    let mut state = LoopState::Running(settings.start_mode);
    let mut last_paint: Option<Instant> = None;

    loop {
        if shutdown.is_requested() {
            tracing::info!("interrupted");
            break;
        }

        while let Some(cmd) = source.poll() {
            let next = cmd.apply(state);
            if next != state {
                // Mode change shows up right away
                last_paint = None;
            }
            state = next;
        }

        if source.is_closed() {
            tracing::info!("command source closed");
            break;
        }

        let LoopState::Running(mode) = state else {
            break;
        };

        if last_paint.map_or(true, |t| t.elapsed() >= settings.tick) {
            let lines = frame_lines(
                &now(),
                mode,
                &settings.face,
                settings.width,
                settings.height,
                settings.twenty_four_hour,
            );
            display.clear()?;
            display.present(&lines)?;
            last_paint = Some(Instant::now());
        }

        thread::sleep(settings.poll);
    }

    display.clear()?;
    display.present(&[GOODBYE.to_string()])?;
    tracing::info!("plain clock stopped");
    Ok(())
}
