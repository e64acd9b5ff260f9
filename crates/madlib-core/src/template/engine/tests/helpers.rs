//! Shared test helpers for engine tests

use crate::words::WordSet;

/// The word set used by the canonical example story
pub(super) fn story_words() -> WordSet {
    words(["dog", "cat", "jump", "big", "quickly"])
}

pub(super) fn words(list: [&str; 5]) -> WordSet {
    WordSet::new(list.map(str::to_string)).unwrap()
}
