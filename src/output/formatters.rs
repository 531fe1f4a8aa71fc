//! Formatting utilities for terminal output

use crate::core::TileState;
use colored::{ColoredString, Colorize};

/// One letter on its status color
#[must_use]
pub fn colored_tile(letter: char, state: TileState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black().bold(),
        TileState::Unset => text.bold(),
        TileState::Space => "   ".normal(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &str, states: &[TileState]) -> String {
    guess
        .chars()
        .zip(states)
        .map(|(letter, &state)| colored_tile(letter, state).to_string())
        .collect()
}

/// Word layout with blanks for letters, e.g. `_ _   _ _ _`
#[must_use]
pub fn word_outline(length: usize, is_space: impl Fn(usize) -> bool) -> String {
    (0..length)
        .map(|position| if is_space(position) { " " } else { "_" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_row_without_colors_keeps_letters() {
        colored::control::set_override(false);
        let states = [TileState::Correct, TileState::Space, TileState::Absent];
        assert_eq!(colored_row("H N", &states), " H     N ");
    }

    #[test]
    fn outline_marks_spaces() {
        assert_eq!(word_outline(4, |_| false), "_ _ _ _");
        assert_eq!(word_outline(5, |p| p == 2), "_ _   _ _");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
