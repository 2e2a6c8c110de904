//! Transient user-facing notices ("toasts").
//!
//! Core logic never renders text itself. It reports a [`ToastKey`], which the
//! app translates through the `toasts` namespace and hands to the
//! [`NotificationGate`] for display.

mod gate;

pub use gate::{
    ActiveToast, GateOutcome, NotificationGate, OverlapPolicy, DEFAULT_TOAST_DURATION,
};

use serde::{Deserialize, Serialize};

/// Severity of a notice, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Warning,
    Success,
}

/// Message keys of the `toasts` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKey {
    IsPrime,
    IsntPrime,
    NotNumber,
    DecimalNumber,
    NumberTooLong,
    PrimeNumberTooLong,
    NoNumber,
    LimitReached,
    ClearSuccess,
}

impl ToastKey {
    /// Translation key inside the `toasts` bundle.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKey::IsPrime => "is_prime",
            ToastKey::IsntPrime => "isnt_prime",
            ToastKey::NotNumber => "not_number",
            ToastKey::DecimalNumber => "decimal_number",
            ToastKey::NumberTooLong => "number_too_long",
            ToastKey::PrimeNumberTooLong => "prime_number_too_long",
            ToastKey::NoNumber => "no_number",
            ToastKey::LimitReached => "limit_reached",
            ToastKey::ClearSuccess => "clear_success",
        }
    }

    /// Every key is always shown with the same severity.
    pub fn level(&self) -> NoticeLevel {
        match self {
            ToastKey::IsPrime | ToastKey::ClearSuccess => NoticeLevel::Success,
            ToastKey::NumberTooLong | ToastKey::PrimeNumberTooLong | ToastKey::NoNumber => {
                NoticeLevel::Warning
            }
            ToastKey::IsntPrime
            | ToastKey::NotNumber
            | ToastKey::DecimalNumber
            | ToastKey::LimitReached => NoticeLevel::Error,
        }
    }
}

impl std::fmt::Display for ToastKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
