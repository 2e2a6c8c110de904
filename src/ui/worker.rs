//! Background prime checks.
//!
//! Trial division on a 40-digit input can run for longer than anyone will
//! wait, so each check gets its own thread and a cancel flag. Results come
//! back through the UI event channel tagged with the ticket they were
//! started under.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use num_bigint::BigUint;

use crate::numbers::is_prime_cancellable;
use crate::ui::events::AppEvent;

pub struct PrimeWorker {
    events: Sender<AppEvent>,
    running: HashMap<u64, Arc<AtomicBool>>,
}

impl PrimeWorker {
    pub fn new(events: Sender<AppEvent>) -> Self {
        Self {
            events,
            running: HashMap::new(),
        }
    }

    /// Start checking `value` under `ticket`.
    pub fn start(&mut self, ticket: u64, value: BigUint) -> io::Result<()> {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let events = self.events.clone();

        thread::Builder::new()
            .name(format!("prime-check-{ticket}"))
            .spawn(move || {
                let started = Instant::now();
                match is_prime_cancellable(&value, || flag.load(Ordering::Relaxed)) {
                    Some(is_prime) => {
                        tracing::debug!(
                            ticket,
                            is_prime,
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "prime check finished"
                        );
                        let _ = events.send(AppEvent::PrimeChecked { ticket, is_prime });
                    }
                    None => tracing::debug!(ticket, "prime check cancelled"),
                }
            })?;

        self.running.insert(ticket, cancel);
        Ok(())
    }

    pub fn cancel(&mut self, ticket: u64) {
        if let Some(flag) = self.running.remove(&ticket) {
            flag.store(true, Ordering::Relaxed);
        }
    }

    /// Forget a ticket whose result has arrived.
    pub fn finished(&mut self, ticket: u64) {
        self.running.remove(&ticket);
    }

    pub fn cancel_all(&mut self) {
        for (_, flag) in self.running.drain() {
            flag.store(true, Ordering::Relaxed);
        }
    }

    pub fn running(&self) -> usize {
        self.running.len()
    }
}

impl Drop for PrimeWorker {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn reports_result_with_its_ticket() {
        let (tx, rx) = mpsc::channel();
        let mut worker = PrimeWorker::new(tx);
        worker.start(7, BigUint::from(97u32)).unwrap();

        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::PrimeChecked { ticket, is_prime }) => {
                assert_eq!(ticket, 7);
                assert!(is_prime);
            }
            _ => panic!("expected PrimeChecked"),
        }
        worker.finished(7);
        assert_eq!(worker.running(), 0);
    }

    #[test]
    fn cancelled_check_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut worker = PrimeWorker::new(tx);
        // 2^61 - 1 is prime; the search would take far longer than the test.
        worker
            .start(1, BigUint::from(2_305_843_009_213_693_951u64))
            .unwrap();
        worker.cancel(1);
        assert_eq!(worker.running(), 0);
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }
}
