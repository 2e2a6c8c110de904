//! Bounded list of entered numbers, kept in ascending numeric order.

use num_bigint::BigUint;
use thiserror::Error;

use super::input::{parse_entry, InputError};
use crate::notice::ToastKey;

/// Maximum number of entries.
pub const CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectError {
    #[error("the list already holds {CAPACITY} numbers")]
    LimitReached,
    #[error("the list is already empty")]
    AlreadyEmpty,
    #[error(transparent)]
    Input(#[from] InputError),
}

impl CollectError {
    pub fn toast_key(&self) -> ToastKey {
        match self {
            CollectError::LimitReached => ToastKey::LimitReached,
            CollectError::AlreadyEmpty => ToastKey::NoNumber,
            CollectError::Input(err) => err.toast_key(),
        }
    }
}

/// One accepted number: its value, and the text it was typed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    value: BigUint,
    text: String,
}

impl Entry {
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// As entered, leading zeros included.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberList {
    entries: Vec<Entry>,
}

impl NumberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= CAPACITY
    }

    /// Entries in ascending numeric order.
    pub fn sorted(&self) -> &[Entry] {
        &self.entries
    }

    /// Validate `text` and insert it. The capacity check runs before any
    /// validation of the text.
    pub fn add(&mut self, text: &str) -> Result<&Entry, CollectError> {
        if self.is_full() {
            return Err(CollectError::LimitReached);
        }
        let value = parse_entry(text)?;
        // Equal values land after the existing ones.
        let index = self.entries.partition_point(|entry| entry.value <= value);
        self.entries.insert(
            index,
            Entry {
                value,
                text: text.to_string(),
            },
        );
        Ok(&self.entries[index])
    }

    /// Empty the list, returning how many entries were dropped.
    pub fn reset(&mut self) -> Result<usize, CollectError> {
        if self.entries.is_empty() {
            return Err(CollectError::AlreadyEmpty);
        }
        let cleared = self.entries.len();
        self.entries.clear();
        Ok(cleared)
    }

    /// Comma-separated entries in sorted order, each shown as typed.
    pub fn joined(&self) -> String {
        self.entries
            .iter()
            .map(Entry::text)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &NumberList) -> Vec<String> {
        list.sorted()
            .iter()
            .map(|entry| entry.value().to_string())
            .collect()
    }

    #[test]
    fn insertion_keeps_numeric_order() {
        let mut list = NumberList::new();
        for text in ["5", "3", "9", "1"] {
            list.add(text).unwrap();
        }
        assert_eq!(values(&list), ["1", "3", "5", "9"]);
    }

    #[test]
    fn order_is_numeric_not_lexicographic() {
        let mut list = NumberList::new();
        for text in ["10", "9", "100", "2"] {
            list.add(text).unwrap();
        }
        assert_eq!(list.joined(), "2, 9, 10, 100");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut list = NumberList::new();
        list.add("4").unwrap();
        list.add("4").unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn entries_keep_their_typed_text() {
        let mut list = NumberList::new();
        for text in ["010", "7", "007", "3"] {
            list.add(text).unwrap();
        }
        assert_eq!(values(&list), ["3", "7", "7", "10"]);
        // Equal values stay in insertion order.
        assert_eq!(list.joined(), "3, 7, 007, 010");
    }

    #[test]
    fn eleventh_add_is_rejected() {
        let mut list = NumberList::new();
        for n in 0..CAPACITY {
            list.add(&n.to_string()).unwrap();
        }
        assert!(list.is_full());
        let before = list.clone();
        assert_eq!(list.add("42"), Err(CollectError::LimitReached));
        assert_eq!(list, before);
    }

    #[test]
    fn capacity_is_reported_before_bad_input() {
        let mut list = NumberList::new();
        for n in 0..CAPACITY {
            list.add(&n.to_string()).unwrap();
        }
        assert_eq!(list.add(""), Err(CollectError::LimitReached));
    }

    #[test]
    fn invalid_entries_leave_the_list_unchanged() {
        let mut list = NumberList::new();
        list.add("8").unwrap();
        assert_eq!(list.add(""), Err(CollectError::Input(InputError::Empty)));
        assert_eq!(list.add("2.5"), Err(CollectError::Input(InputError::Decimal)));
        assert_eq!(
            list.add(&"1".repeat(46)),
            Err(CollectError::Input(InputError::TooLong))
        );
        assert_eq!(values(&list), ["8"]);
    }

    #[test]
    fn reset_on_empty_list_reports_no_number() {
        let mut list = NumberList::new();
        let err = list.reset().unwrap_err();
        assert_eq!(err, CollectError::AlreadyEmpty);
        assert_eq!(err.toast_key(), ToastKey::NoNumber);
    }

    #[test]
    fn reset_clears_entries() {
        let mut list = NumberList::new();
        list.add("1").unwrap();
        list.add("2").unwrap();
        assert_eq!(list.reset(), Ok(2));
        assert!(list.is_empty());
    }
}
