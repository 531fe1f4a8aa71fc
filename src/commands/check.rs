//! Check command implementation
//!
//! Classifies one guess against a target, typing it through the game rules so
//! separators between words are filled in automatically.

use crate::core::{TargetWord, TileState, classify_row};
use crate::game::{Game, GuessError};

/// Outcome of checking a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub target: String,
    /// Guess as typed into the board, spaces included
    pub guess: String,
    pub states: Vec<TileState>,
    pub target_letters: usize,
    pub guess_letters: usize,
    /// Whether the game would accept this guess for submission
    pub accepted: bool,
    pub solved: bool,
}

/// Classify `guess` against `target`
///
/// # Errors
///
/// Returns an error if the target is not a valid word or the guess contains
/// characters other than letters and spaces.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = TargetWord::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    if let Some(bad) = guess
        .chars()
        .find(|c| !c.is_ascii_alphabetic() && *c != ' ')
    {
        return Err(format!("Invalid guess: unexpected character '{bad}'"));
    }

    let mut game = Game::new(target.clone(), String::new());
    for letter in guess.chars().filter(char::is_ascii_alphabetic) {
        game.type_letter(letter);
    }
    let typed = game.current_guess().text();
    let guess_letters = game.current_guess().effective_len(&target);

    let accepted = match game.submit() {
        Ok(_) => true,
        Err(GuessError::LengthMismatch { expected, actual }) => {
            tracing::debug!(expected, actual, "guess length mismatch");
            false
        }
    };

    Ok(CheckResult {
        states: classify_row(&typed, &target),
        solved: target.matches(&typed),
        target: target.text().to_string(),
        guess: typed,
        target_letters: target.effective_len(),
        guess_letters,
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_guess_is_solved() {
        let result = check_guess("sipu", "SIPU").unwrap();
        assert!(result.solved);
        assert!(result.accepted);
        assert!(result.states.iter().all(|&s| s == TileState::Correct));
    }

    #[test]
    fn separators_are_filled_in() {
        let result = check_guess("he nitis", "henitis").unwrap();
        assert_eq!(result.guess, "HE NITIS");
        assert!(result.solved);
        assert_eq!(result.states[2], TileState::Space);
        assert_eq!(result.target_letters, 7);
    }

    #[test]
    fn duplicates_are_not_rationed() {
        let result = check_guess("sipu", "ssss").unwrap();
        assert_eq!(
            result.states,
            vec![
                TileState::Correct,
                TileState::Present,
                TileState::Present,
                TileState::Present
            ]
        );
        assert!(!result.solved);
    }

    #[test]
    fn short_guess_is_classified_but_not_accepted() {
        let result = check_guess("sipu", "si").unwrap();
        assert!(!result.accepted);
        assert_eq!(result.guess_letters, 2);
        assert_eq!(result.states[2], TileState::Unset);
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert!(check_guess("", "abc").is_err());
        assert!(check_guess("sipu", "si-u").is_err());
    }
}
