//! On-screen keyboard layout and letter highlighting

use crate::core::{TargetWord, TileState, classify};
use rustc_hash::FxHashMap;

/// A key the player can press, physically or on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Text shown on the key cap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "←".to_string(),
        }
    }
}

/// Keyboard rows restricted to the alphabet the vocabulary actually uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: Vec<Vec<Key>>,
}

impl KeyboardLayout {
    /// Build a layout from the letters used by the vocabulary
    ///
    /// Letters are deduplicated, uppercased and sorted, then split over two
    /// rows (the first one gets the extra key). ENTER and BACKSPACE form the
    /// last row.
    pub fn from_alphabet(letters: impl IntoIterator<Item = char>) -> Self {
        let mut alphabet: Vec<char> = letters
            .into_iter()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        alphabet.sort_unstable();
        alphabet.dedup();

        let split = alphabet.len().div_ceil(2);
        let (first, second) = alphabet.split_at(split);

        let rows = [first, second]
            .into_iter()
            .filter(|row| !row.is_empty())
            .map(|row| row.iter().map(|&c| Key::Letter(c)).collect())
            .chain(std::iter::once(vec![Key::Enter, Key::Backspace]))
            .collect();

        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    /// All letter keys in layout order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().filter_map(|key| match key {
            Key::Letter(c) => Some(*c),
            Key::Enter | Key::Backspace => None,
        })
    }
}

/// Highlight for one letter given the rows submitted so far
///
/// Rows are scanned in order. Within a row the first occurrence of the letter
/// decides that row's classification; across rows the most informative
/// classification is kept.
#[must_use]
pub fn letter_status<'a>(
    letter: char,
    rows: impl IntoIterator<Item = &'a str>,
    target: &TargetWord,
) -> TileState {
    let letter = letter.to_ascii_uppercase();
    let mut best = TileState::Unset;

    for row in rows {
        let Some(position) = row
            .chars()
            .position(|c| c.to_ascii_uppercase() == letter)
        else {
            continue;
        };

        let state = classify(position, letter, target);
        if state.rank() > best.rank() {
            best = state;
        }
        if best == TileState::Correct {
            break;
        }
    }

    best
}

/// Highlights for every letter key of a layout
#[must_use]
pub fn key_statuses<'a>(
    layout: &KeyboardLayout,
    rows: impl IntoIterator<Item = &'a str> + Clone,
    target: &TargetWord,
) -> FxHashMap<char, TileState> {
    layout
        .letters()
        .map(|letter| (letter, letter_status(letter, rows.clone(), target)))
        .collect()
}
