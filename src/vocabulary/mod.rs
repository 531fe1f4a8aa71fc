//! Target vocabulary
//!
//! Provides the embedded word list, file loading and the random word provider.

mod embedded;
pub mod loader;
pub mod provider;

pub use embedded::{ENTRIES, ENTRIES_COUNT};
pub use loader::{WordEntry, entries_from_slice, load_from_file, parse_entries};
pub use provider::{RandomWordProvider, WordProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_count_matches_const() {
        assert_eq!(ENTRIES.len(), ENTRIES_COUNT);
    }

    #[test]
    fn embedded_entries_are_valid_words() {
        let entries = entries_from_slice(ENTRIES);
        assert_eq!(entries.len(), ENTRIES.len());
    }

    #[test]
    fn embedded_entries_have_definitions() {
        for &(word, definition) in ENTRIES {
            assert!(!definition.is_empty(), "Word '{word}' has no definition");
        }
    }

    #[test]
    fn embedded_vocabulary_has_multi_word_entries() {
        let entries = entries_from_slice(ENTRIES);
        assert!(
            entries
                .iter()
                .any(|entry| !entry.word.space_positions().is_empty())
        );
    }
}
