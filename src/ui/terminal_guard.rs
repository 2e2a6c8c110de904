use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal exactly once: on drop, or from the panic hook if
/// the UI thread panics first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        let guard = Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&cleanup);
            default_hook(info);
        }));
    }
}

fn run_once(slot: &Mutex<Option<Cleanup>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(cleanup) = slot.take() {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.cleanup);
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(SetCursorStyle::SteadyBar)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(SetCursorStyle::DefaultUserShape);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });

    Ok((terminal, guard))
}
