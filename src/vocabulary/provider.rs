//! Random target word selection

use super::loader::WordEntry;
use crate::core::TargetWord;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Source of target words and their definitions
pub trait WordProvider {
    /// Pick the next target word, `None` when the vocabulary is empty
    fn random_word(&mut self) -> Option<TargetWord>;

    /// Definition for a word, empty when unknown
    fn definition(&self, word: &TargetWord) -> String;

    /// Every letter that can appear in a target word
    fn alphabet(&self) -> Vec<char>;
}

/// Uniform random choice over a fixed list of entries
pub struct RandomWordProvider<R: Rng = StdRng> {
    entries: Vec<WordEntry>,
    rng: R,
}

impl RandomWordProvider<StdRng> {
    /// Provider seeded from the operating system
    #[must_use]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self::with_rng(entries, StdRng::from_os_rng())
    }

    /// Provider with a reproducible sequence of words
    #[must_use]
    pub fn seeded(entries: Vec<WordEntry>, seed: u64) -> Self {
        Self::with_rng(entries, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordProvider<R> {
    #[must_use]
    pub const fn with_rng(entries: Vec<WordEntry>, rng: R) -> Self {
        Self { entries, rng }
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

impl<R: Rng> WordProvider for RandomWordProvider<R> {
    fn random_word(&mut self) -> Option<TargetWord> {
        self.entries
            .choose(&mut self.rng)
            .map(|entry| entry.word.clone())
    }

    fn definition(&self, word: &TargetWord) -> String {
        self.entries
            .iter()
            .find(|entry| entry.word == *word)
            .map(|entry| entry.definition.clone())
            .unwrap_or_default()
    }

    fn alphabet(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .entries
            .iter()
            .flat_map(|entry| entry.word.letters())
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }
}
