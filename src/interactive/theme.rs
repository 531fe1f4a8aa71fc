//! Light and dark color palettes

use crate::core::TileState;
use crate::game::CellPaint;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
    pub key: Color,
    pub error: Color,
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 19),
            text: Color::Rgb(248, 248, 248),
            muted: Color::Rgb(129, 131, 132),
            accent: Color::Cyan,
            border: Color::Rgb(58, 58, 60),
            correct: Color::Rgb(83, 141, 78),
            present: Color::Rgb(181, 159, 59),
            absent: Color::Rgb(58, 58, 60),
            key: Color::Rgb(90, 92, 94),
            error: Color::Rgb(220, 80, 80),
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            text: Color::Rgb(18, 18, 19),
            muted: Color::Rgb(120, 124, 126),
            accent: Color::Blue,
            border: Color::Rgb(211, 214, 218),
            correct: Color::Rgb(106, 170, 100),
            present: Color::Rgb(201, 180, 88),
            absent: Color::Rgb(120, 124, 126),
            key: Color::Rgb(211, 214, 218),
            error: Color::Rgb(200, 40, 40),
        }
    }

    #[must_use]
    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Fill for a board tile
    #[must_use]
    pub fn tile(&self, paint: CellPaint) -> Style {
        let filled = |bg: Color| {
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        };
        match paint {
            CellPaint::Blank => self.base().add_modifier(Modifier::BOLD),
            CellPaint::Space => self.base(),
            CellPaint::Correct => filled(self.correct),
            CellPaint::Present => filled(self.present),
            CellPaint::Absent => filled(self.absent),
        }
    }

    /// Border around a board tile
    #[must_use]
    pub fn tile_border(&self, paint: CellPaint) -> Style {
        let color = match paint {
            CellPaint::Blank | CellPaint::Space => self.border,
            CellPaint::Correct => self.correct,
            CellPaint::Present => self.present,
            CellPaint::Absent => self.absent,
        };
        Style::default().fg(color).bg(self.background)
    }

    /// Fill for an on-screen key given its best known status
    #[must_use]
    pub fn key(&self, status: TileState) -> Style {
        let bg = match status {
            TileState::Correct => self.correct,
            TileState::Present => self.present,
            TileState::Absent => self.absent,
            TileState::Unset | TileState::Space => self.key,
        };
        let fg = match status {
            TileState::Unset | TileState::Space => self.text,
            _ => Color::White,
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }
}
