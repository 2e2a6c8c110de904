//! Trial-division primality test over arbitrary-precision integers.

use num_bigint::BigUint;
use num_integer::{Integer, Roots};
use num_traits::{ToPrimitive, Zero};

use super::input::{parse_candidate, InputError};

/// How many divisions run between two cancellation checks.
const CANCEL_CHECK_INTERVAL: u64 = 4096;

/// Whether `n` is prime.
pub fn is_prime(n: &BigUint) -> bool {
    is_prime_cancellable(n, || false) == Some(true)
}

/// Like [`is_prime`], but consults `cancelled` periodically and returns
/// `None` once it reports true.
///
/// Divides by 2 and then by every odd number up to the integer square
/// root. The bound is exact, so perfect squares of large primes are caught.
pub fn is_prime_cancellable<F>(n: &BigUint, cancelled: F) -> Option<bool>
where
    F: FnMut() -> bool,
{
    match n.to_u64() {
        Some(small) => trial_division_u64(small, cancelled),
        None => trial_division_big(n, cancelled),
    }
}

/// Validate `text` and test it.
pub fn check(text: &str) -> Result<bool, InputError> {
    parse_candidate(text).map(|n| is_prime(&n))
}

fn trial_division_u64<F>(n: u64, mut cancelled: F) -> Option<bool>
where
    F: FnMut() -> bool,
{
    if n < 2 {
        return Some(false);
    }
    if n % 2 == 0 {
        return Some(n == 2);
    }
    let limit = Roots::sqrt(&n);
    let mut divisor = 3u64;
    let mut steps = 0u64;
    while divisor <= limit {
        if n % divisor == 0 {
            return Some(false);
        }
        steps += 1;
        if steps % CANCEL_CHECK_INTERVAL == 0 && cancelled() {
            return None;
        }
        divisor += 2;
    }
    Some(true)
}

fn trial_division_big<F>(n: &BigUint, mut cancelled: F) -> Option<bool>
where
    F: FnMut() -> bool,
{
    // Only reached for values above u64::MAX, so n >= 2.
    if n.is_even() {
        return Some(false);
    }
    let limit = Roots::sqrt(n);
    let mut divisor = BigUint::from(3u32);
    let mut steps = 0u64;
    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return Some(false);
        }
        steps += 1;
        if steps % CANCEL_CHECK_INTERVAL == 0 && cancelled() {
            return None;
        }
        divisor += 2u32;
    }
    Some(true)
}
