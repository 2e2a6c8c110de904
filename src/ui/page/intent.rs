use super::state::View;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageIntent {
    SelectView(View),
    ToggleView,
    /// A character typed into the active field.
    TypeChar(char),
    /// Remove the last character of the active field. Never refused.
    Backspace,
    /// Enter: check in the prime view, add in the order view.
    Submit,
    CheckPrime,
    AddNumber,
    ResetNumbers,
    /// A worker finished the check started under `ticket`.
    PrimeChecked { ticket: u64, is_prime: bool },
}

impl Intent for PageIntent {}
