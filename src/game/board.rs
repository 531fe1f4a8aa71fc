//! What each board cell shows
//!
//! The board is a read-only view over the game and the reveal sequencer. A
//! cell's paint depends only on its classification and on whether its reveal
//! delay has elapsed.

use super::state::{Game, MAX_ROWS, Phase};
use crate::core::{TileState, classify};
use crate::reveal::RevealSequencer;
use std::ops::Range;

/// Visual class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPaint {
    /// Neutral tile, typed or not
    Blank,
    /// Structural space, drawn as background
    Space,
    Correct,
    Present,
    Absent,
}

/// Paint for a classification, hidden until revealed
#[must_use]
pub const fn cell_paint(state: TileState, revealed: bool) -> CellPaint {
    match (state, revealed) {
        (TileState::Space, _) => CellPaint::Space,
        (_, false) | (TileState::Unset, true) => CellPaint::Blank,
        (TileState::Correct, true) => CellPaint::Correct,
        (TileState::Present, true) => CellPaint::Present,
        (TileState::Absent, true) => CellPaint::Absent,
    }
}

/// Direction of a manual board scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Manually chosen first column, kept while focus stays on `anchor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardScroll {
    pub start: usize,
    pub anchor: usize,
}

/// Snapshot of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: TileState,
    pub revealed: bool,
}

impl Cell {
    #[must_use]
    pub const fn paint(&self) -> CellPaint {
        cell_paint(self.state, self.revealed)
    }
}

/// Board view over a game and its sequencer
#[derive(Clone, Copy)]
pub struct Board<'a> {
    game: &'a Game,
    sequencer: &'a RevealSequencer,
}

impl<'a> Board<'a> {
    #[must_use]
    pub const fn new(game: &'a Game, sequencer: &'a RevealSequencer) -> Self {
        Self { game, sequencer }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        MAX_ROWS
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.game.target().len()
    }

    /// Letter typed or submitted in a cell, spaces excluded
    #[must_use]
    pub fn letter(&self, row: usize, column: usize) -> Option<char> {
        let letter = match (self.game.row(row), self.game.phase()) {
            (Some(guess), _) => guess.chars().nth(column),
            (None, Phase::Typing { row: typing }) if typing == row => {
                self.game.current_guess().char_at(column)
            }
            (None, _) => None,
        };
        letter.filter(|&c| c != ' ')
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        let letter = self.letter(row, column);
        let target = self.game.target();

        if target.is_space(column) {
            return Cell {
                letter: None,
                state: TileState::Space,
                revealed: true,
            };
        }

        if let Some(tile) = self.sequencer.tile(row, column) {
            return Cell {
                letter,
                state: tile.state,
                revealed: tile.revealed,
            };
        }

        // Submitted rows outside an active reveal are classified directly
        let settled = self.sequencer.revealing_row() != Some(row);
        match self.game.row(row).and_then(|guess| guess.chars().nth(column)) {
            Some(submitted) if settled => Cell {
                letter,
                state: classify(column, submitted, target),
                revealed: true,
            },
            _ => Cell {
                letter,
                state: TileState::Unset,
                revealed: false,
            },
        }
    }

    /// Accessible description of a cell
    ///
    /// Format: `Row N, Column M`, then `: Letter X` when a letter is shown and
    /// `, <status>` once the classification is visible.
    #[must_use]
    pub fn label(&self, row: usize, column: usize) -> String {
        let cell = self.cell(row, column);
        let mut label = format!("Row {}, Column {}", row + 1, column + 1);
        if let Some(letter) = cell.letter {
            label.push_str(&format!(": Letter {letter}"));
        }
        if cell.revealed
            && let Some(status) = cell.state.description()
        {
            label.push_str(&format!(", {status}"));
        }
        label
    }

    /// Column of the last typed letter in the active row, never a space
    #[must_use]
    pub fn active_typing_index(&self) -> Option<usize> {
        let Phase::Typing { .. } = self.game.phase() else {
            return None;
        };
        let guess = self.game.current_guess();
        let target = self.game.target();
        (0..guess.len()).rev().find(|&column| !target.is_space(column))
    }

    /// Column that should stay visible when the row is wider than the screen
    ///
    /// The tile being flipped wins over the typing cursor. Space columns
    /// defer to the next letter column.
    #[must_use]
    pub fn focus_column(&self) -> usize {
        let target = self.game.target();
        if let Some((_, column)) = self.sequencer.flipping_tile() {
            return (column..target.len())
                .find(|&c| !target.is_space(c))
                .unwrap_or(column);
        }
        self.active_typing_index().unwrap_or(0)
    }

    /// Columns to draw when only `visible` fit
    ///
    /// Follows the focus column unless a manual scroll was taken at the
    /// current focus.
    #[must_use]
    pub fn visible_columns(&self, visible: usize, scroll: Option<BoardScroll>) -> Range<usize> {
        let focus = self.focus_column();
        match scroll {
            Some(scroll) if scroll.anchor == focus => {
                scrolled_window(self.columns(), visible, scroll.start)
            }
            _ => visible_window(self.columns(), visible, focus),
        }
    }

    /// Scroll one column past what is shown now
    ///
    /// `None` when every column already fits.
    #[must_use]
    pub fn scroll(
        &self,
        visible: usize,
        current: Option<BoardScroll>,
        direction: ScrollDirection,
    ) -> Option<BoardScroll> {
        let total = self.columns();
        if visible == 0 || visible >= total {
            return None;
        }
        let shown = self.visible_columns(visible, current);
        let start = match direction {
            ScrollDirection::Left => shown.start.saturating_sub(1),
            ScrollDirection::Right => (shown.start + 1).min(total - visible),
        };
        Some(BoardScroll {
            start,
            anchor: self.focus_column(),
        })
    }
}

/// Window of `visible` columns out of `total`, centred on `focus` where possible
#[must_use]
pub fn visible_window(total: usize, visible: usize, focus: usize) -> Range<usize> {
    if visible == 0 {
        return 0..0;
    }
    if total <= visible {
        return 0..total;
    }
    let start = focus
        .saturating_sub(visible / 2)
        .min(total - visible);
    start..start + visible
}

/// Window of `visible` columns out of `total` starting at `start`
#[must_use]
pub fn scrolled_window(total: usize, visible: usize, start: usize) -> Range<usize> {
    if visible == 0 {
        return 0..0;
    }
    if total <= visible {
        return 0..total;
    }
    let start = start.min(total - visible);
    start..start + visible
}
