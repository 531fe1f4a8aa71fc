//! Guess state machine
//!
//! Owns the target word, the submitted rows and the guess being typed. Letter
//! and delete input is only accepted while typing; a submitted row moves the
//! game into `Revealing` until the reveal sequencer reports completion.

use super::guess::GuessBuffer;
use crate::core::TargetWord;
use std::fmt;

/// Number of guess rows on the board
pub const MAX_ROWS: usize = 6;

/// Where the game currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing { row: usize },
    Revealing { row: usize },
    Won,
    Lost,
}

/// Overall outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a submit request that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was stored in `row`; its reveal should start
    Committed { row: usize },
    /// Submission is not possible right now (revealing or game over)
    Ignored,
}

/// Rejected submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, .. } => {
                write!(f, "Word must be {expected} letters!")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct Game {
    target: TargetWord,
    definition: String,
    rows: [Option<String>; MAX_ROWS],
    current: GuessBuffer,
    current_row: usize,
    phase: Phase,
}

impl Game {
    #[must_use]
    pub fn new(target: TargetWord, definition: impl Into<String>) -> Self {
        tracing::debug!(
            length = target.len(),
            spaces = target.space_positions().len(),
            "new game"
        );

        Self {
            target,
            definition: definition.into(),
            rows: Default::default(),
            current: GuessBuffer::new(),
            current_row: 0,
            phase: Phase::Typing { row: 0 },
        }
    }

    /// Type a letter into the active row
    ///
    /// Only ASCII letters are accepted, and only while typing. Returns whether
    /// the guess changed.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if !matches!(self.phase, Phase::Typing { .. }) || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.current.push_letter(letter, &self.target)
    }

    /// Delete the last typed letter. Returns whether the guess changed.
    pub fn delete_letter(&mut self) -> bool {
        if !matches!(self.phase, Phase::Typing { .. }) {
            return false;
        }
        self.current.delete(&self.target)
    }

    /// Validate and commit the current guess
    ///
    /// # Errors
    /// Returns `GuessError::LengthMismatch` when the number of typed letters
    /// differs from the target's effective length. Nothing is modified.
    pub fn submit(&mut self) -> Result<SubmitOutcome, GuessError> {
        let Phase::Typing { row } = self.phase else {
            return Ok(SubmitOutcome::Ignored);
        };

        let expected = self.target.effective_len();
        let actual = self.current.effective_len(&self.target);
        if actual != expected {
            tracing::debug!(row, expected, actual, "guess rejected");
            return Err(GuessError::LengthMismatch { expected, actual });
        }

        self.rows[row] = Some(self.current.text());
        self.phase = Phase::Revealing { row };
        tracing::debug!(row, "guess committed");
        Ok(SubmitOutcome::Committed { row })
    }

    /// Called once the reveal of the committed row has finished
    ///
    /// Does nothing unless a row is revealing.
    pub fn complete_reveal(&mut self) -> GameStatus {
        let Phase::Revealing { row } = self.phase else {
            return self.status();
        };

        let solved = self.rows[row]
            .as_deref()
            .is_some_and(|guess| self.target.matches(guess));

        self.phase = if solved {
            tracing::info!(guesses = row + 1, "game won");
            Phase::Won
        } else if row + 1 >= MAX_ROWS {
            tracing::info!("game lost");
            Phase::Lost
        } else {
            self.current_row = row + 1;
            self.current.clear();
            Phase::Typing {
                row: self.current_row,
            }
        };

        self.status()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Won => GameStatus::Won,
            Phase::Lost => GameStatus::Lost,
            Phase::Typing { .. } | Phase::Revealing { .. } => GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> &GuessBuffer {
        &self.current
    }

    /// Submitted guess for a row, if any
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).and_then(Option::as_deref)
    }

    /// All submitted guesses in row order
    pub fn submitted_rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(Option::as_deref)
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.submitted_rows().count()
    }
}
