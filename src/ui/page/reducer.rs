//! Reducer for the page.

use crate::notice::ToastKey;
use crate::numbers::input::{char_len, is_editable, parse_candidate};
use crate::numbers::{MAX_DIGITS, PRIME_SOFT_LIMIT};
use crate::ui::mvi::Reducer;

use super::intent::PageIntent;
use super::state::{PageEffect, PageState, PrimeStatus, View};

/// Pure: toasts and worker requests are appended to `notices` and
/// `effects`, and the caller acts on them.
pub struct PageReducer;

impl Reducer for PageReducer {
    type State = PageState;
    type Intent = PageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::SelectView(view) => {
                state.view = view;
                state
            }
            PageIntent::ToggleView => {
                state.view = state.view.toggled();
                state
            }
            PageIntent::TypeChar(ch) => {
                let mut candidate = state.active_input().to_string();
                candidate.push(ch);
                match state.view {
                    View::Prime => edit_prime(state, candidate),
                    View::Order => edit_entry(state, candidate),
                }
            }
            PageIntent::Backspace => {
                let mut candidate = state.active_input().to_string();
                if candidate.pop().is_none() {
                    return state;
                }
                match state.view {
                    View::Prime => set_prime_input(state, candidate),
                    View::Order => {
                        state.add_input = candidate;
                        state
                    }
                }
            }
            PageIntent::Submit => match state.view {
                View::Prime => check_prime(state),
                View::Order => add_number(state),
            },
            PageIntent::CheckPrime => check_prime(state),
            PageIntent::AddNumber => add_number(state),
            PageIntent::ResetNumbers => {
                match state.numbers.reset() {
                    Ok(_) => state.notices.push(ToastKey::ClearSuccess),
                    Err(err) => state.notices.push(err.toast_key()),
                }
                state
            }
            PageIntent::PrimeChecked { ticket, is_prime } => {
                // Results for an edited or re-submitted input are stale.
                if state.prime_status.pending_ticket() != Some(ticket) {
                    return state;
                }
                if is_prime {
                    state.prime_status = PrimeStatus::Prime;
                    state.notices.push(ToastKey::IsPrime);
                } else {
                    state.prime_status = PrimeStatus::NotPrime;
                    state.notices.push(ToastKey::IsntPrime);
                }
                state
            }
        }
    }
}

fn edit_prime(mut state: PageState, candidate: String) -> PageState {
    if char_len(&candidate) > PRIME_SOFT_LIMIT {
        state.notices.push(ToastKey::PrimeNumberTooLong);
    }
    if !is_editable(&candidate) {
        state.notices.push(ToastKey::NotNumber);
        return state;
    }
    set_prime_input(state, candidate)
}

fn set_prime_input(mut state: PageState, text: String) -> PageState {
    cancel_pending(&mut state);
    state.prime_status = PrimeStatus::Unknown;
    state.prime_input = text;
    state
}

fn edit_entry(mut state: PageState, candidate: String) -> PageState {
    if char_len(&candidate) > MAX_DIGITS {
        state.notices.push(ToastKey::NumberTooLong);
    }
    if !is_editable(&candidate) {
        state.notices.push(ToastKey::NotNumber);
        return state;
    }
    state.add_input = candidate;
    state
}

fn check_prime(mut state: PageState) -> PageState {
    match parse_candidate(&state.prime_input) {
        Ok(value) => {
            cancel_pending(&mut state);
            let ticket = state.next_ticket;
            state.next_ticket += 1;
            state.prime_status = PrimeStatus::Checking { ticket };
            state.effects.push(PageEffect::StartCheck { ticket, value });
        }
        Err(err) => state.notices.push(err.toast_key()),
    }
    state
}

fn add_number(mut state: PageState) -> PageState {
    match state.numbers.add(&state.add_input) {
        Ok(_) => state.add_input.clear(),
        Err(err) => state.notices.push(err.toast_key()),
    }
    state
}

fn cancel_pending(state: &mut PageState) {
    if let Some(ticket) = state.prime_status.pending_ticket() {
        state.effects.push(PageEffect::CancelCheck { ticket });
    }
}
