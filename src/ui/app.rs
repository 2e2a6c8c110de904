use std::sync::Arc;
use std::time::Instant;

use num_bigint::BigUint;

use crate::config::ToastConfig;
use crate::i18n::{Catalog, Locale, Namespace, Route, Translate, Translator};
use crate::notice::{ActiveToast, GateOutcome, NotificationGate, ToastKey};
use crate::numbers::is_prime;
use crate::ui::locale::{LocaleIntent, LocaleReducer, LocaleState};
use crate::ui::mvi::Reducer;
use crate::ui::page::{PageEffect, PageIntent, PageReducer, PageState};
use crate::ui::worker::PrimeWorker;

/// Where prime checks run.
enum CheckRunner {
    /// On the calling thread, before the dispatch returns.
    Inline,
    Threaded(PrimeWorker),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Page state (MVI pattern).
    pub page: PageState,
    /// Active locale and route (MVI pattern).
    pub locale: LocaleState,
    gate: NotificationGate,
    /// What the gate did with the most recent notice.
    last_outcome: Option<GateOutcome>,
    catalog: Arc<Catalog>,
    runner: CheckRunner,
}

impl App {
    /// Checks run inline until a worker is attached.
    pub fn new(catalog: Arc<Catalog>, route: Route, toast: &ToastConfig) -> Self {
        Self {
            should_quit: false,
            page: PageState::default(),
            locale: LocaleState::new(route),
            gate: NotificationGate::new(toast.overlap, toast.duration()),
            last_outcome: None,
            catalog,
            runner: CheckRunner::Inline,
        }
    }

    pub fn attach_worker(&mut self, worker: PrimeWorker) {
        self.runner = CheckRunner::Threaded(worker);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        if let CheckRunner::Threaded(worker) = &mut self.runner {
            worker.cancel_all();
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.locale.locale()
    }

    pub fn route(&self) -> &Route {
        &self.locale.route
    }

    pub fn translator(&self) -> Translator<'_> {
        self.catalog.translator(self.current_locale())
    }

    /// Shorthand for a parameterless lookup in the current locale.
    pub fn t(&self, namespace: Namespace, key: &str) -> String {
        self.translator().t(namespace, key, &[])
    }

    pub fn active_toast(&self) -> Option<&ActiveToast> {
        self.gate.active()
    }

    pub fn last_toast_outcome(&self) -> Option<GateOutcome> {
        self.last_outcome
    }

    pub fn dismiss_toast(&mut self) -> bool {
        self.gate.dismiss()
    }

    pub fn dispatch_page(&mut self, intent: PageIntent) {
        self.dispatch_page_at(intent, Instant::now());
    }

    /// Dispatch with an explicit clock, for deterministic toast timing.
    pub fn dispatch_page_at(&mut self, intent: PageIntent, now: Instant) {
        dispatch_mvi!(self, page, PageReducer, intent);
        self.flush_outbox(now);
    }

    pub fn dispatch_locale(&mut self, intent: LocaleIntent) {
        dispatch_mvi!(self, locale, LocaleReducer, intent);
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    pub fn on_tick_at(&mut self, now: Instant) {
        self.gate.tick(now);
    }

    /// A worker answered.
    pub fn on_prime_checked(&mut self, ticket: u64, is_prime: bool) {
        if let CheckRunner::Threaded(worker) = &mut self.runner {
            worker.finished(ticket);
        }
        self.dispatch_page(PageIntent::PrimeChecked { ticket, is_prime });
    }

    /// Carry out effects, then show queued toasts in order. With the
    /// replace policy the last toast of a dispatch is the one left showing.
    fn flush_outbox(&mut self, now: Instant) {
        for effect in std::mem::take(&mut self.page.effects) {
            match effect {
                PageEffect::StartCheck { ticket, value } => self.start_check(ticket, value),
                PageEffect::CancelCheck { ticket } => {
                    if let CheckRunner::Threaded(worker) = &mut self.runner {
                        worker.cancel(ticket);
                    }
                }
            }
        }

        for key in std::mem::take(&mut self.page.notices) {
            self.last_outcome = Some(self.show_toast(key, now));
        }
    }

    fn start_check(&mut self, ticket: u64, value: BigUint) {
        if let CheckRunner::Threaded(worker) = &mut self.runner {
            match worker.start(ticket, value.clone()) {
                Ok(()) => {
                    tracing::debug!(ticket, digits = value.to_string().len(), "prime check started");
                    return;
                }
                Err(err) => {
                    tracing::warn!(%err, ticket, "could not start worker, checking inline");
                }
            }
        }
        let is_prime = is_prime(&value);
        dispatch_mvi!(
            self,
            page,
            PageReducer,
            PageIntent::PrimeChecked { ticket, is_prime }
        );
    }

    fn show_toast(&mut self, key: ToastKey, now: Instant) -> GateOutcome {
        let message = self.t(Namespace::Toasts, key.as_str());
        let outcome = self.gate.notify(key, message, now);
        match outcome {
            GateOutcome::Shown => {}
            GateOutcome::Replaced { previous } => {
                tracing::debug!(toast = %key, previous, "toast replaced the active one")
            }
            GateOutcome::Suppressed => tracing::debug!(
                toast = %key,
                policy = ?self.gate.policy(),
                "toast dropped while another is active"
            ),
        }
        outcome
    }
}
