//! Interrupt handling shared between signal handlers and the render loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable stop flag.
///
/// Set by SIGINT/SIGTERM once [`register_signals`](ShutdownFlag::register_signals)
/// has been called, or by hand via [`request`](ShutdownFlag::request).
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    flag: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop.
    pub fn request(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Route SIGINT and SIGTERM into this flag.
    #[cfg(unix)]
    pub fn register_signals(&self) -> std::io::Result<()> {
        use signal_hook::consts::{SIGINT, SIGTERM};

        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.flag))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn register_signals(&self) -> std::io::Result<()> {
        Ok(())
    }
}
