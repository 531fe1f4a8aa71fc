//! Vocabulary loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! entries. Lines have the form `word|definition`; the definition is
//! optional, blank lines and `#` comments are skipped.

use crate::core::TargetWord;
use std::fs;
use std::io;
use std::path::Path;

/// A target word and its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: TargetWord,
    pub definition: String,
}

/// Parse vocabulary text
///
/// Invalid words are skipped with a warning.
///
/// # Examples
/// ```
/// use lenape_word_game::vocabulary::loader::parse_entries;
///
/// let entries = parse_entries("# comment\nsipu|River\nmbi\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].definition, "River");
/// assert_eq!(entries[1].definition, "");
/// ```
#[must_use]
pub fn parse_entries(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let (word, definition) = trimmed.split_once('|').unwrap_or((trimmed, ""));
            match TargetWord::new(word) {
                Ok(word) => Some(WordEntry {
                    word,
                    definition: definition.trim().to_string(),
                }),
                Err(err) => {
                    tracing::warn!(line = index + 1, %err, "skipping vocabulary entry");
                    None
                }
            }
        })
        .collect()
}

/// Load entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Convert embedded `(word, definition)` pairs to entries
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, definition)| {
            TargetWord::new(word).ok().map(|word| WordEntry {
                word,
                definition: definition.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_entries_reads_words_and_definitions() {
        let entries = parse_entries("tulpe|Turtle\nhe nitis | Hello, friend\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word.text(), "TULPE");
        assert_eq!(entries[0].definition, "Turtle");
        assert_eq!(entries[1].word.text(), "HE NITIS");
        assert_eq!(entries[1].definition, "Hello, friend");
    }

    #[test]
    fn parse_entries_skips_invalid_and_comments() {
        let entries = parse_entries("# header\n\nsh0rt|bad\n   \nahas|Crow\n|no word\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word.text(), "AHAS");
    }

    #[test]
    fn entries_from_slice_skips_invalid() {
        let entries = entries_from_slice(&[("sipu", "River"), ("x-y", "bad"), ("mbi", "")]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word.text(), "MBI");
    }

    #[test]
    fn load_from_file_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lowan|Winter").unwrap();
        writeln!(file, "lapi knewel|See you again").unwrap();

        let entries = load_from_file(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word.space_positions(), &[4]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
