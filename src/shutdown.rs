use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Set once SIGINT/SIGTERM arrives or a quit is requested.
///
/// In raw mode Ctrl+C arrives as a key event, so the signals mostly matter
/// for `kill` and a closing terminal.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    requested: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register SIGINT and SIGTERM handlers that flip this handle.
    pub fn install_signal_handlers(&self) -> io::Result<()> {
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.requested))?;
        }
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.requested.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let handle = ShutdownHandle::new();
        let other = handle.clone();
        assert!(!other.is_shutting_down());
        handle.signal();
        assert!(other.is_shutting_down());
    }
}
