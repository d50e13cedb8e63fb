use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use termclock::config::{ClockConfig, FaceStyle};
use termclock::control::{spawn_line_listener, ChannelSource, ShutdownFlag};
use termclock::export::{self, DEFAULT_HTML, DEFAULT_SVG};
use termclock::host::{self, PlainSettings, TerminalDisplay, GOODBYE};
use termclock::ui::{self, Theme};
use termclock::{events, telemetry, App, Mode};

#[derive(Parser, Debug)]
#[command(name = "termclock", version)]
#[command(about = "Analog and digital clock for the terminal")]
struct Args {
    /// Mode to start in
    #[arg(value_enum)]
    mode: Option<Mode>,

    /// Plain output: repaint the whole screen and read `t`/`q` lines from stdin
    #[arg(long)]
    plain: bool,

    /// Analog face style for the interactive clock
    #[arg(long, value_enum)]
    face: Option<FaceStyle>,

    /// Write an SVG clock face and exit
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_SVG,
        conflicts_with_all = ["plain", "web", "export"]
    )]
    gui: Option<PathBuf>,

    /// Write a standalone HTML clock and exit
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_HTML,
        conflicts_with_all = ["plain", "export"]
    )]
    web: Option<PathBuf>,

    /// Export the current clock state to a JSON file and exit
    #[arg(short, long, value_name = "PATH", conflicts_with = "plain")]
    export: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Milliseconds between repaints in plain mode
    #[arg(short, long, value_name = "MS")]
    refresh: Option<u64>,

    /// Milliseconds between input polls
    #[arg(long, value_name = "MS")]
    poll: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _telemetry = telemetry::init_tracing("info");

    let mut config = ClockConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(ms) = args.refresh {
        config.refresh.tick_ms = ms;
    }
    if let Some(ms) = args.poll {
        config.refresh.poll_ms = ms;
    }
    if let Some(face) = args.face {
        config.face.style = face;
    }
    let mode = args.mode.unwrap_or(config.clock.start_mode);

    // Handle generation modes (non-interactive)
    if let Some(ref path) = args.gui {
        export::write_svg(path, &Local::now().naive_local(), &config)?;
        println!("Created {}", path.display());
        return Ok(());
    }
    if let Some(ref path) = args.web {
        export::write_html(path, mode, &config)?;
        println!("Created {} - open it in a browser", path.display());
        return Ok(());
    }
    if let Some(ref path) = args.export {
        export::write_snapshot(path, &Local::now().naive_local(), mode)?;
        println!("Exported clock state to: {}", path.display());
        return Ok(());
    }

    let shutdown = ShutdownFlag::new();
    shutdown.register_signals().context("installing signal handlers")?;

    if args.plain {
        return run_plain(&config, mode, &shutdown);
    }

    run_tui(config, mode, &shutdown)
}

/// Run the plain clock with a stdin listener thread
fn run_plain(config: &ClockConfig, mode: Mode, shutdown: &ShutdownFlag) -> Result<()> {
    let (tx, mut source) = ChannelSource::create("stdin");
    spawn_line_listener(io::BufReader::new(io::stdin()), tx).context("starting input listener")?;

    let settings = PlainSettings::from_config(config, mode);
    let mut display = TerminalDisplay::new(io::stdout());
    host::run_plain(&mut display, &mut source, shutdown, &settings, || {
        Local::now().naive_local()
    })?;
    Ok(())
}

/// Run the interactive full-screen clock
fn run_tui(config: ClockConfig, mode: Mode, shutdown: &ShutdownFlag) -> Result<()> {
    let theme = Theme::from_choice(config.theme);
    let poll = config.refresh.poll();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(config, mode, theme);
    tracing::info!(mode = mode.label(), "interactive clock started");

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, shutdown, poll);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if result.is_ok() {
        println!("{}", GOODBYE);
    }
    tracing::info!("interactive clock stopped");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    shutdown: &ShutdownFlag,
    poll: Duration,
) -> Result<()> {
    while app.running() {
        if shutdown.is_requested() {
            app.quit();
            break;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(poll)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
