//! Core domain types for the word game
//!
//! This module contains the target word and the letter classifier. Both are
//! pure and free of UI or timing concerns.

mod tile;
mod word;

pub use tile::{TileState, classify, classify_row, row_to_emoji};
pub use word::{TargetWord, WordError};
