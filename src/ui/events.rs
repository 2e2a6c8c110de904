use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// A prime-check worker finished.
    PrimeChecked { ticket: u64, is_prime: bool },
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It emits key presses as they arrive and a
    /// `Tick` every `tick_rate`, and stops once `shutdown` is signalled or
    /// the receiver is gone.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = event_tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll so the shutdown flag is seen promptly.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        // Resize and mouse events need no handling: the next
                        // draw picks up the new size.
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(%err, "failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(%err, "failed to poll terminal events");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
