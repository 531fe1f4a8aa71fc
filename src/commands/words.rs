//! Vocabulary listing

use crate::vocabulary::WordEntry;

/// Overview of a vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySummary {
    pub total: usize,
    /// Entries with more than one word
    pub phrases: usize,
    pub shortest: usize,
    pub longest: usize,
    /// Letters that appear in any entry, sorted
    pub alphabet: String,
}

#[must_use]
pub fn summarize(entries: &[WordEntry]) -> VocabularySummary {
    let lengths = entries.iter().map(|entry| entry.word.len());

    let mut alphabet: Vec<char> = entries
        .iter()
        .flat_map(|entry| entry.word.letters())
        .collect();
    alphabet.sort_unstable();
    alphabet.dedup();

    VocabularySummary {
        total: entries.len(),
        phrases: entries
            .iter()
            .filter(|entry| !entry.word.space_positions().is_empty())
            .count(),
        shortest: lengths.clone().min().unwrap_or(0),
        longest: lengths.max().unwrap_or(0),
        alphabet: alphabet.into_iter().collect(),
    }
}

/// Entries sorted by length, then alphabetically
#[must_use]
pub fn sorted_entries(entries: &[WordEntry]) -> Vec<&WordEntry> {
    let mut sorted: Vec<&WordEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.word
            .len()
            .cmp(&b.word.len())
            .then_with(|| a.word.text().cmp(b.word.text()))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::parse_entries;

    fn entries() -> Vec<WordEntry> {
        parse_entries("sipu|River\nhe nitis|Hello, friend\nmbi|Water\n")
    }

    #[test]
    fn summary_counts_phrases_and_letters() {
        let summary = summarize(&entries());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.phrases, 1);
        assert_eq!(summary.shortest, 3);
        assert_eq!(summary.longest, 8);
        assert_eq!(summary.alphabet, "BEHIMNPSTU");
    }

    #[test]
    fn empty_vocabulary_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.longest, 0);
        assert!(summary.alphabet.is_empty());
    }

    #[test]
    fn sorted_by_length_then_text() {
        let entries = entries();
        let sorted: Vec<&str> = sorted_entries(&entries)
            .iter()
            .map(|entry| entry.word.text())
            .collect();
        assert_eq!(sorted, vec!["MBI", "SIPU", "HE NITIS"]);
    }
}
