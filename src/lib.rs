//! Lenape Word Game
//!
//! A six-guess word game over a Lenape vocabulary. Target words may hold
//! several words separated by spaces; spaces are filled in while typing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lenape_word_game::core::{TargetWord, classify_row, row_to_emoji};
//! use lenape_word_game::game::Game;
//!
//! let target = TargetWord::new("he nitis").unwrap();
//! let mut game = Game::new(target.clone(), "Hello, friend");
//! for letter in "henitis".chars() {
//!     game.type_letter(letter);
//! }
//! game.submit().unwrap();
//!
//! let guess = game.row(0).unwrap();
//! println!("{}", row_to_emoji(&classify_row(guess, &target)));
//! ```

// Core domain types
pub mod core;

// Game rules, board and keyboard views
pub mod game;

// Timed tile reveal
pub mod reveal;

// Word lists
pub mod vocabulary;

// Dark mode persistence
pub mod preferences;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
