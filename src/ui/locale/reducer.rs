use crate::ui::mvi::Reducer;

use super::intent::LocaleIntent;
use super::state::LocaleState;

pub struct LocaleReducer;

impl Reducer for LocaleReducer {
    type State = LocaleState;
    type Intent = LocaleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let target = match intent {
            LocaleIntent::Switch(locale) => locale,
            LocaleIntent::Cycle => state.locale().next(),
        };
        match state.route.switch_locale(target) {
            Some(route) => {
                tracing::info!(
                    from = %state.locale(),
                    to = %target,
                    path = %route.as_path(),
                    "locale switched"
                );
                LocaleState { route }
            }
            None => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, Route};

    #[test]
    fn switch_changes_only_the_locale() {
        let state = LocaleState::new(Route::new(Locale::Pt, Locale::Pt, "/", Some("a=1")));
        let state = LocaleReducer::reduce(state, LocaleIntent::Switch(Locale::En));
        assert_eq!(state.locale(), Locale::En);
        assert_eq!(state.route.path(), "/");
        assert_eq!(state.route.query(), Some("a=1"));
    }

    #[test]
    fn switch_to_same_locale_keeps_state() {
        let state = LocaleState::new(Route::root(Locale::Es, Locale::Pt));
        let next = LocaleReducer::reduce(state.clone(), LocaleIntent::Switch(Locale::Es));
        assert_eq!(next, state);
    }

    #[test]
    fn cycle_walks_button_order() {
        let state = LocaleState::new(Route::root(Locale::Es, Locale::Pt));
        let state = LocaleReducer::reduce(state, LocaleIntent::Cycle);
        assert_eq!(state.locale(), Locale::En);
        assert_eq!(state.route.as_path(), "/en");
    }
}
