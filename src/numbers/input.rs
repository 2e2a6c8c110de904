//! Validation of user-entered numeric text.

use num_bigint::BigUint;
use thiserror::Error;

use crate::notice::ToastKey;

/// Longest accepted input, in characters.
pub const MAX_DIGITS: usize = 45;

/// Past this length a prime check is still allowed but gets slow.
pub const PRIME_SOFT_LIMIT: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no number entered")]
    Empty,
    #[error("input is not a number")]
    NotANumber,
    #[error("decimal numbers are not allowed")]
    Decimal,
    #[error("number is longer than {MAX_DIGITS} characters")]
    TooLong,
}

impl InputError {
    pub fn toast_key(&self) -> ToastKey {
        match self {
            InputError::Empty => ToastKey::NoNumber,
            InputError::NotANumber => ToastKey::NotNumber,
            InputError::Decimal => ToastKey::DecimalNumber,
            InputError::TooLong => ToastKey::NumberTooLong,
        }
    }
}

/// Whether `text` may sit in an input field while the user is typing.
///
/// Digits with at most one decimal point are let through so that the
/// decimal case can be reported on submit. Empty text is fine; a lone `.`
/// is not.
pub fn is_editable(text: &str) -> bool {
    if text == "." {
        return false;
    }
    let mut dots = 0;
    text.chars().all(|ch| match ch {
        '0'..='9' => true,
        '.' => {
            dots += 1;
            dots == 1
        }
        _ => false,
    })
}

/// Character length, which is what the limits are expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Validate text submitted for a prime check.
///
/// The decimal check comes first, so an over-long decimal reports
/// [`InputError::Decimal`].
pub fn parse_candidate(text: &str) -> Result<BigUint, InputError> {
    if text.contains('.') {
        return Err(InputError::Decimal);
    }
    if char_len(text) > MAX_DIGITS {
        return Err(InputError::TooLong);
    }
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    parse_digits(text)
}

/// Validate text submitted to the number list.
///
/// Length is checked before the decimal point here.
pub fn parse_entry(text: &str) -> Result<BigUint, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if char_len(text) > MAX_DIGITS {
        return Err(InputError::TooLong);
    }
    if text.contains('.') {
        return Err(InputError::Decimal);
    }
    parse_digits(text)
}

fn parse_digits(text: &str) -> Result<BigUint, InputError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    BigUint::parse_bytes(text.as_bytes(), 10).ok_or(InputError::NotANumber)
}
