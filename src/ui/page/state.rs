use num_bigint::BigUint;

use crate::notice::ToastKey;
use crate::numbers::NumberList;
use crate::ui::mvi::UiState;

/// Which half of the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Prime,
    Order,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Prime => View::Order,
            View::Order => View::Prime,
        }
    }
}

/// Outcome of the last prime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimeStatus {
    /// No check since the input last changed.
    #[default]
    Unknown,
    /// A worker holds `ticket` and has not answered yet.
    Checking { ticket: u64 },
    Prime,
    NotPrime,
}

impl PrimeStatus {
    /// `Some(true/false)` once a check has completed.
    pub fn verdict(&self) -> Option<bool> {
        match self {
            PrimeStatus::Prime => Some(true),
            PrimeStatus::NotPrime => Some(false),
            _ => None,
        }
    }

    pub fn pending_ticket(&self) -> Option<u64> {
        match self {
            PrimeStatus::Checking { ticket } => Some(*ticket),
            _ => None,
        }
    }
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    StartCheck { ticket: u64, value: BigUint },
    CancelCheck { ticket: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub view: View,
    pub prime_input: String,
    pub prime_status: PrimeStatus,
    pub add_input: String,
    pub numbers: NumberList,
    pub next_ticket: u64,
    /// Toasts raised by the last dispatch, oldest first.
    pub notices: Vec<ToastKey>,
    pub effects: Vec<PageEffect>,
}

impl UiState for PageState {}

impl PageState {
    /// Text of the field the active view edits.
    pub fn active_input(&self) -> &str {
        match self.view {
            View::Prime => &self.prime_input,
            View::Order => &self.add_input,
        }
    }

    pub fn is_checking(&self) -> bool {
        self.prime_status.pending_ticket().is_some()
    }
}
