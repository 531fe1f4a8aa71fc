//! Per-letter feedback classification
//!
//! Each column of a guess is classified on its own:
//! - Space: the target has a structural space in this column
//! - Correct: the letter matches the target in this column
//! - Present: the letter appears somewhere else in the target
//! - Absent: the letter does not appear in the target
//!
//! Duplicate letters are not rationed against the target's letter counts.
//! Guessing `AA` against `AB` marks the second `A` as present.

use super::TargetWord;

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    /// Not classified yet
    #[default]
    Unset,
    Absent,
    Present,
    Correct,
    Space,
}

impl TileState {
    /// Ranking used when several observations of one letter compete
    ///
    /// Higher is more informative. Space and unset never win over a real
    /// classification.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unset | Self::Space => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Human readable status for assistive output
    ///
    /// Returns `None` for states that carry no letter feedback.
    #[must_use]
    pub const fn description(self) -> Option<&'static str> {
        match self {
            Self::Correct => Some("Correct"),
            Self::Present => Some("Present in word but wrong position"),
            Self::Absent => Some("Not in the word"),
            Self::Unset | Self::Space => None,
        }
    }

    /// Emoji square for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
            Self::Space => ' ',
        }
    }
}

/// Classify `letter` guessed at `position` against `target`
///
/// # Examples
/// ```
/// use lenape_word_game::core::{TargetWord, TileState, classify};
///
/// let target = TargetWord::new("sipu").unwrap();
/// assert_eq!(classify(0, 's', &target), TileState::Correct);
/// assert_eq!(classify(0, 'u', &target), TileState::Present);
/// assert_eq!(classify(0, 'x', &target), TileState::Absent);
/// ```
#[must_use]
pub fn classify(position: usize, letter: char, target: &TargetWord) -> TileState {
    if target.is_space(position) {
        return TileState::Space;
    }

    let letter = letter.to_ascii_uppercase();
    if target.char_at(position) == Some(letter) {
        TileState::Correct
    } else if target.contains(letter) {
        TileState::Present
    } else {
        TileState::Absent
    }
}

/// Classify every column of `target` for a guess
///
/// Columns past the end of the guess stay `Unset`, except structural spaces.
#[must_use]
pub fn classify_row(guess: &str, target: &TargetWord) -> Vec<TileState> {
    let mut letters = guess.chars();
    (0..target.len())
        .map(|position| match letters.next() {
            Some(letter) => classify(position, letter, target),
            None if target.is_space(position) => TileState::Space,
            None => TileState::Unset,
        })
        .collect()
}

/// Render a row of tiles as emoji squares
#[must_use]
pub fn row_to_emoji(states: &[TileState]) -> String {
    states.iter().map(|state| state.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(text: &str) -> TargetWord {
        TargetWord::new(text).unwrap()
    }

    #[test]
    fn classify_exact_match_is_all_correct() {
        let word = target("lenape");
        let states = classify_row("LENAPE", &word);
        assert!(states.iter().all(|&s| s == TileState::Correct));
    }

    #[test]
    fn classify_is_case_insensitive() {
        let word = target("tulpe");
        assert_eq!(classify(0, 't', &word), TileState::Correct);
        assert_eq!(classify(1, 'T', &word), TileState::Present);
    }

    #[test]
    fn classify_space_column_ignores_letter() {
        let word = target("he nitis");
        assert_eq!(classify(2, ' ', &word), TileState::Space);
        assert_eq!(classify(2, 'H', &word), TileState::Space);
    }

    #[test]
    fn classify_duplicates_are_not_rationed() {
        // AB has a single A, yet both guessed A's light up
        let word = target("ab");
        assert_eq!(
            classify_row("AA", &word),
            vec![TileState::Correct, TileState::Present]
        );

        // Every extra copy of a present letter is present too
        let word = target("kishux");
        assert_eq!(
            classify_row("SSSSSS", &word),
            vec![
                TileState::Present,
                TileState::Present,
                TileState::Correct,
                TileState::Present,
                TileState::Present,
                TileState::Present,
            ]
        );
    }

    #[test]
    fn classify_mixed_row() {
        let word = target("ahtu");
        assert_eq!(
            classify_row("TUAX", &word),
            vec![
                TileState::Present,
                TileState::Present,
                TileState::Present,
                TileState::Absent,
            ]
        );
    }

    #[test]
    fn classify_is_pure() {
        let word = target("lapi knewel");
        let first = classify_row("LIPA KNEWLE", &word);
        for _ in 0..10 {
            assert_eq!(classify_row("LIPA KNEWLE", &word), first);
        }
    }

    #[test]
    fn classify_row_short_guess_leaves_unset() {
        let word = target("he nitis");
        let states = classify_row("H", &word);
        assert_eq!(states[0], TileState::Correct);
        assert_eq!(states[1], TileState::Unset);
        assert_eq!(states[2], TileState::Space);
        assert_eq!(states[7], TileState::Unset);
    }

    #[test]
    fn rank_orders_information() {
        assert!(TileState::Correct.rank() > TileState::Present.rank());
        assert!(TileState::Present.rank() > TileState::Absent.rank());
        assert!(TileState::Absent.rank() > TileState::Unset.rank());
        assert_eq!(TileState::Space.rank(), TileState::Unset.rank());
    }

    #[test]
    fn descriptions_match_assistive_text() {
        assert_eq!(TileState::Correct.description(), Some("Correct"));
        assert_eq!(
            TileState::Present.description(),
            Some("Present in word but wrong position")
        );
        assert_eq!(TileState::Absent.description(), Some("Not in the word"));
        assert_eq!(TileState::Space.description(), None);
        assert_eq!(TileState::Unset.description(), None);
    }

    #[test]
    fn row_to_emoji_keeps_spaces() {
        let word = target("he nitis");
        let states = classify_row("HE NITIX", &word);
        assert_eq!(row_to_emoji(&states), "🟩🟩 🟩🟩🟩🟩⬛");
    }
}
