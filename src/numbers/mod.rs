//! Input validation, primality testing and the bounded sorted number list.

pub mod collector;
pub mod input;
pub mod prime;

pub use collector::{CollectError, Entry, NumberList, CAPACITY};
pub use input::{InputError, MAX_DIGITS, PRIME_SOFT_LIMIT};
pub use prime::{check, is_prime, is_prime_cancellable};
