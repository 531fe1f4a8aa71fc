//! Full-screen terminal game

pub mod app;
pub mod rendering;
pub mod theme;

pub use app::{App, AppTimer, Statistics, run_tui};
pub use theme::Theme;
