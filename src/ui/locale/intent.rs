use crate::i18n::Locale;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleIntent {
    /// Show the current page in `Locale`. No-op when already active.
    Switch(Locale),
    /// Move to the next locale in button order.
    Cycle,
}

impl Intent for LocaleIntent {}
