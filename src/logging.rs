use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// Output goes to `config.file` because stdout is drawn over by the UI.
/// Returns `false` when no file is configured and nothing was installed.
/// `RUST_LOG` takes precedence over `config.level`.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    Ok(true)
}
