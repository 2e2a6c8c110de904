use crate::i18n::{Locale, Route};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocaleState {
    pub route: Route,
}

impl UiState for LocaleState {}

impl LocaleState {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn locale(&self) -> Locale {
        self.route.locale()
    }
}
