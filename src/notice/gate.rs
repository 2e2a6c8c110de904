//! One-at-a-time toast gate with a self-cancelling auto-clear.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::{NoticeLevel, ToastKey};

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// What happens when a notice arrives while another one is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// The new notice replaces the active one and gets a fresh timer.
    #[default]
    Replace,
    /// The new notice is dropped until the active one clears.
    Suppress,
}

/// The notice currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub level: NoticeLevel,
    pub key: ToastKey,
    pub message: String,
    /// Monotonic id of this activation. A scheduled clear only applies to
    /// the activation that created it.
    pub id: u64,
    clear_at: Instant,
}

impl ActiveToast {
    pub fn clear_at(&self) -> Instant {
        self.clear_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Shown,
    Replaced { previous: u64 },
    Suppressed,
}

#[derive(Debug)]
pub struct NotificationGate {
    policy: OverlapPolicy,
    duration: Duration,
    active: Option<ActiveToast>,
    next_id: u64,
}

impl Default for NotificationGate {
    fn default() -> Self {
        Self::new(OverlapPolicy::default(), DEFAULT_TOAST_DURATION)
    }
}

impl NotificationGate {
    pub fn new(policy: OverlapPolicy, duration: Duration) -> Self {
        Self {
            policy,
            duration,
            active: None,
            next_id: 1,
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn active(&self) -> Option<&ActiveToast> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Offer a notice to the gate.
    ///
    /// Replacing an active notice discards its pending clear along with it,
    /// so the new notice always gets the full duration.
    pub fn notify(&mut self, key: ToastKey, message: String, now: Instant) -> GateOutcome {
        // An expired notice that no tick has collected yet does not block.
        self.tick(now);

        let outcome = match (&self.active, self.policy) {
            (Some(_), OverlapPolicy::Suppress) => return GateOutcome::Suppressed,
            (Some(previous), OverlapPolicy::Replace) => GateOutcome::Replaced {
                previous: previous.id,
            },
            (None, _) => GateOutcome::Shown,
        };

        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(toast = %key, id, ?outcome, "toast shown");
        self.active = Some(ActiveToast {
            level: key.level(),
            key,
            message,
            id,
            clear_at: now + self.duration,
        });
        outcome
    }

    /// Run the scheduled clear. Returns true when a notice was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.active {
            Some(toast) if now >= toast.clear_at => {
                tracing::trace!(id = toast.id, "toast expired");
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Remove the active notice early.
    pub fn dismiss(&mut self) -> bool {
        self.active.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn first_notice_is_shown() {
        let mut gate = NotificationGate::default();
        let now = Instant::now();
        let outcome = gate.notify(ToastKey::IsPrime, "prime".into(), now);
        assert_eq!(outcome, GateOutcome::Shown);
        let active = gate.active().expect("active toast");
        assert_eq!(active.key, ToastKey::IsPrime);
        assert_eq!(active.level, NoticeLevel::Success);
        assert_eq!(active.clear_at(), now + secs(3));
    }

    #[test]
    fn clears_three_seconds_after_activation() {
        let mut gate = NotificationGate::default();
        let start = Instant::now();
        gate.notify(ToastKey::NoNumber, "none".into(), start);

        assert!(!gate.tick(start + Duration::from_millis(2999)));
        assert!(gate.is_active());
        assert!(gate.tick(start + secs(3)));
        assert!(!gate.is_active());
    }

    #[test]
    fn replacement_cancels_the_earlier_clear() {
        let mut gate = NotificationGate::default();
        let start = Instant::now();
        gate.notify(ToastKey::NotNumber, "first".into(), start);

        let later = start + secs(2);
        let outcome = gate.notify(ToastKey::DecimalNumber, "second".into(), later);
        assert_eq!(outcome, GateOutcome::Replaced { previous: 1 });

        // The first notice's clear would have fired here.
        assert!(!gate.tick(start + secs(3)));
        assert_eq!(gate.active().map(|t| t.message.as_str()), Some("second"));

        assert!(gate.tick(later + secs(3)));
        assert!(gate.active().is_none());
    }

    #[test]
    fn suppress_policy_keeps_the_active_notice() {
        let mut gate = NotificationGate::new(OverlapPolicy::Suppress, secs(3));
        let start = Instant::now();
        gate.notify(ToastKey::LimitReached, "full".into(), start);

        let outcome = gate.notify(ToastKey::NoNumber, "empty".into(), start + secs(1));
        assert_eq!(outcome, GateOutcome::Suppressed);
        assert_eq!(gate.active().map(|t| t.key), Some(ToastKey::LimitReached));
    }

    #[test]
    fn reports_configured_policy_and_duration() {
        let gate = NotificationGate::new(OverlapPolicy::Suppress, secs(5));
        assert_eq!(gate.policy(), OverlapPolicy::Suppress);
        assert_eq!(gate.duration(), secs(5));
        assert_eq!(NotificationGate::default().policy(), OverlapPolicy::Replace);
    }

    #[test]
    fn suppress_policy_accepts_after_expiry() {
        let mut gate = NotificationGate::new(OverlapPolicy::Suppress, secs(3));
        let start = Instant::now();
        gate.notify(ToastKey::LimitReached, "full".into(), start);

        // No tick in between: notify collects the expired notice itself.
        let outcome = gate.notify(ToastKey::NoNumber, "empty".into(), start + secs(4));
        assert_eq!(outcome, GateOutcome::Shown);
        assert_eq!(gate.active().map(|t| t.key), Some(ToastKey::NoNumber));
    }

    #[test]
    fn dismiss_clears_immediately() {
        let mut gate = NotificationGate::default();
        gate.notify(ToastKey::ClearSuccess, "cleared".into(), Instant::now());
        assert!(gate.dismiss());
        assert!(!gate.dismiss());
    }
}
