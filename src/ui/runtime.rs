use crate::config::Config;
use crate::i18n::{Catalog, Route};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::PrimeWorker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Fast enough that a 3 s toast clears within a frame or two of its deadline.
const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(config: &Config, catalog: Arc<Catalog>, route: Route) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers()?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    let mut app = App::new(catalog, route, &config.toast);
    app.attach_worker(PrimeWorker::new(events.sender()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::PrimeChecked { ticket, is_prime }) => {
                app.on_prime_checked(ticket, is_prime)
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread.
    shutdown.signal();
    drop(guard);
    tracing::info!("terminal restored");
    Ok(())
}
