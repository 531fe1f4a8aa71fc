//! Target word representation
//!
//! A `TargetWord` stores the uppercase word together with the positions of its
//! structural spaces. Spaces are filled in automatically while typing, so the
//! length the player has to type is the effective length.

use std::fmt;

/// A target word, possibly made of several space-separated parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    chars: Vec<char>,
    space_positions: Vec<usize>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Word contains invalid character {ch:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are normalized to
    /// uppercase. Interior spaces are kept as space positions.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty after trimming
    /// - It contains anything other than ASCII letters and interior spaces
    ///
    /// # Examples
    /// ```
    /// use lenape_word_game::core::TargetWord;
    ///
    /// let word = TargetWord::new("lapi knewel").unwrap();
    /// assert_eq!(word.text(), "LAPI KNEWEL");
    /// assert_eq!(word.space_positions(), &[4]);
    /// assert_eq!(word.effective_len(), 10);
    ///
    /// assert!(TargetWord::new("   ").is_err());
    /// assert!(TargetWord::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !c.is_ascii_uppercase() && c != ' ') {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars: Vec<char> = text.chars().collect();
        let space_positions = chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ' ')
            .map(|(i, _)| i)
            .collect();

        Ok(Self {
            text,
            chars,
            space_positions,
        })
    }

    /// Get the word as a string slice (uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total number of columns, spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of columns the player has to type
    #[inline]
    #[must_use]
    pub fn effective_len(&self) -> usize {
        self.chars.len() - self.space_positions.len()
    }

    /// Indices that hold a structural space
    #[inline]
    #[must_use]
    pub fn space_positions(&self) -> &[usize] {
        &self.space_positions
    }

    /// Check whether a column is a structural space
    #[inline]
    #[must_use]
    pub fn is_space(&self, position: usize) -> bool {
        self.chars.get(position) == Some(&' ')
    }

    /// Get the character at a column, if any
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.chars.contains(&letter.to_ascii_uppercase())
    }

    /// Letters of the word in order, spaces excluded
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied().filter(|&c| c != ' ')
    }

    /// Case-insensitive comparison against a guess
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text.eq_ignore_ascii_case(guess)
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
