//! Game rules: guess state machine, keyboard highlighting and board view

pub mod board;
mod guess;
pub mod keyboard;
mod state;

pub use board::{
    Board, BoardScroll, Cell, CellPaint, ScrollDirection, cell_paint, scrolled_window,
    visible_window,
};
pub use guess::GuessBuffer;
pub use keyboard::{Key, KeyboardLayout, key_statuses, letter_status};
pub use state::{Game, GameStatus, GuessError, MAX_ROWS, Phase, SubmitOutcome};
