//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and overlays for the game screen. Key positions
//! come from [`key_rects`], which is also what mouse clicks are tested
//! against.

use super::app::App;
use super::theme::Theme;
use crate::core::TileState;
use crate::game::{
    Board, Cell, CellPaint, Game, GameStatus, Key, KeyboardLayout, MAX_ROWS, ScrollDirection,
    key_statuses,
};
use crate::reveal::Clock;
use crate::vocabulary::WordProvider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Terminal width below which tiles and keys shrink
pub const NARROW_WIDTH: u16 = 60;

/// Cell sizes for the current terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Metrics {
    tile_width: u16,
    tile_height: u16,
    key_width: u16,
    wide_key_width: u16,
    key_height: u16,
}

impl Metrics {
    const fn for_width(width: u16) -> Self {
        if width < NARROW_WIDTH {
            Self {
                tile_width: 3,
                tile_height: 1,
                key_width: 3,
                wide_key_width: 7,
                key_height: 1,
            }
        } else {
            Self {
                tile_width: 5,
                tile_height: 3,
                key_width: 5,
                wide_key_width: 9,
                key_height: 3,
            }
        }
    }

    const fn key_width(&self, key: Key) -> u16 {
        match key {
            Key::Letter(_) => self.key_width,
            Key::Enter | Key::Backspace => self.wide_key_width,
        }
    }

    const fn compact(&self) -> bool {
        self.tile_height < 3
    }
}

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub definition: Rect,
    pub toast: Rect,
    pub board: Rect,
    pub status: Rect,
    pub keyboard: Rect,
    pub help: Rect,
}

#[must_use]
pub fn screen_areas(area: Rect, layout: &KeyboardLayout) -> ScreenAreas {
    let metrics = Metrics::for_width(area.width);
    let board_height = MAX_ROWS as u16 * metrics.tile_height;
    let keyboard_height = layout.rows().len() as u16 * metrics.key_height;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(2),               // Definition
            Constraint::Length(1),               // Toast
            Constraint::Min(board_height),       // Board
            Constraint::Length(1),               // Screen reader status
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(1),               // Help
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        definition: chunks[1],
        toast: chunks[2],
        board: chunks[3],
        status: chunks[4],
        keyboard: chunks[5],
        help: chunks[6],
    }
}

/// Position of every on-screen key that fits inside `area`
fn key_rects(area: Rect, layout: &KeyboardLayout, metrics: Metrics) -> Vec<(Rect, Key)> {
    let mut rects = Vec::new();

    for (index, row) in layout.rows().iter().enumerate() {
        let y = area.y + index as u16 * metrics.key_height;
        if y + metrics.key_height > area.bottom() {
            break;
        }

        let row_width = row
            .iter()
            .map(|&key| metrics.key_width(key) + 1)
            .sum::<u16>()
            .saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for &key in row {
            let width = metrics.key_width(key);
            if x + width > area.right() {
                break;
            }
            rects.push((Rect::new(x, y, width, metrics.key_height), key));
            x += width + 1;
        }
    }

    rects
}

/// On-screen key under a terminal cell, for a frame of size `area`
#[must_use]
pub fn key_at(area: Rect, layout: &KeyboardLayout, column: u16, row: u16) -> Option<Key> {
    let keyboard = screen_areas(area, layout).keyboard;
    let metrics = Metrics::for_width(area.width);
    key_rects(keyboard, layout, metrics)
        .into_iter()
        .find(|(rect, _)| rect.contains(Position::new(column, row)))
        .map(|(_, key)| key)
}

/// Placement of the visible tile columns inside the board area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardGeometry {
    visible: usize,
    step: u16,
    x0: u16,
    y0: u16,
    row_width: u16,
}

impl BoardGeometry {
    fn new(area: Rect, metrics: Metrics, total: usize) -> Self {
        let step = metrics.tile_width + 1;
        let visible = if total as u16 * step <= area.width + 1 {
            total
        } else {
            // Two cells each side for the scroll indicators
            usize::from((area.width.saturating_sub(4) + 1) / step).max(1)
        };
        let row_width = (visible.min(total) as u16 * step).saturating_sub(1);
        let board_height = MAX_ROWS as u16 * metrics.tile_height;
        Self {
            visible,
            step,
            x0: area.x + area.width.saturating_sub(row_width) / 2,
            y0: area.y + area.height.saturating_sub(board_height) / 2,
            row_width,
        }
    }

    /// Column of the left indicator, if there is room for it
    fn left_arrow(&self, area: Rect) -> Option<u16> {
        (self.x0 >= area.x + 2).then(|| self.x0 - 2)
    }

    /// Column of the right indicator for a row drawn at `x_row`
    fn right_arrow(&self, area: Rect, x_row: u16) -> Option<u16> {
        let x = x_row + self.row_width + 1;
        (x < area.right()).then_some(x)
    }
}

/// How many board columns fit in a frame of size `area`
#[must_use]
pub fn visible_board_columns(area: Rect, layout: &KeyboardLayout, total: usize) -> usize {
    let board = screen_areas(area, layout).board;
    BoardGeometry::new(board, Metrics::for_width(area.width), total).visible
}

/// Scroll indicator under a terminal cell, for a frame of size `area`
#[must_use]
pub fn scroll_arrow_at(
    area: Rect,
    layout: &KeyboardLayout,
    total: usize,
    column: u16,
    row: u16,
) -> Option<ScrollDirection> {
    let board = screen_areas(area, layout).board;
    let metrics = Metrics::for_width(area.width);
    let geometry = BoardGeometry::new(board, metrics, total);
    let bottom = (geometry.y0 + MAX_ROWS as u16 * metrics.tile_height).min(board.bottom());
    if geometry.visible >= total || row < geometry.y0 || row >= bottom {
        return None;
    }

    if geometry.left_arrow(board) == Some(column) {
        Some(ScrollDirection::Left)
    } else if geometry.right_arrow(board, geometry.x0) == Some(column) {
        Some(ScrollDirection::Right)
    } else {
        None
    }
}

/// Main UI rendering function
pub fn ui<P: WordProvider, C: Clock>(f: &mut Frame, app: &App<P, C>) {
    let theme = Theme::for_mode(app.preferences.dark_mode());
    let area = f.area();
    let areas = screen_areas(area, &app.layout);
    let metrics = Metrics::for_width(area.width);

    f.render_widget(Block::default().style(theme.base()), area);
    render_header(f, &theme, areas.header);
    render_help(f, app, &theme, areas.help);

    let Some(game) = app.game.as_ref() else {
        let empty = Paragraph::new("No words available")
            .alignment(Alignment::Center)
            .style(theme.base().fg(theme.muted));
        f.render_widget(empty, areas.board);
        return;
    };
    let board = Board::new(game, &app.sequencer);

    render_definition(f, game.definition(), &theme, areas.definition);
    if let Some(toast) = &app.toast {
        render_toast(f, toast, &theme, areas.toast);
    }
    render_board(f, app, &board, &theme, metrics, areas.board);
    render_status(f, app, &board, &theme, areas.status);
    render_keyboard(f, app, game, &theme, metrics, areas.keyboard);

    if app.show_modal {
        render_modal(f, game, &theme, area);
    }
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new("Lenape Word Game")
        .style(
            theme
                .base()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(theme.base().fg(theme.accent)),
        );
    f.render_widget(header, area);
}

fn render_definition(f: &mut Frame, definition: &str, theme: &Theme, area: Rect) {
    let paragraph = Paragraph::new(definition)
        .style(theme.base().fg(theme.muted).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_toast(f: &mut Frame, text: &str, theme: &Theme, area: Rect) {
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let rect = Rect::new(area.x + (area.width - width) / 2, area.y, width, 1).intersection(area);
    let toast = Paragraph::new(text)
        .style(
            Style::default()
                .fg(theme.background)
                .bg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(toast, rect);
}

/// Per-tile highlights on top of the tile's paint
#[derive(Debug, Clone, Copy, Default)]
struct Emphasis {
    pulse: bool,
    flipping: bool,
    shaking: bool,
}

fn render_board<P: WordProvider, C: Clock>(
    f: &mut Frame,
    app: &App<P, C>,
    board: &Board<'_>,
    theme: &Theme,
    metrics: Metrics,
    area: Rect,
) {
    let total = board.columns();
    let geometry = BoardGeometry::new(area, metrics, total);
    let BoardGeometry { step, x0, y0, .. } = geometry;
    let columns = board.visible_columns(geometry.visible, app.scroll);
    let flipping = app.sequencer.flipping_tile();
    let indicator = theme.base().fg(theme.muted);

    for row in 0..board.rows() {
        let y = y0 + row as u16 * metrics.tile_height;
        if y + metrics.tile_height > area.bottom() {
            break;
        }
        let shaking = app.sequencer.shaking_row() == Some(row);
        let x_row = if shaking { x0 + 1 } else { x0 };

        for (slot, column) in columns.clone().enumerate() {
            let rect = Rect::new(
                x_row + slot as u16 * step,
                y,
                metrics.tile_width,
                metrics.tile_height,
            )
            .intersection(area);
            if rect.is_empty() {
                continue;
            }
            let emphasis = Emphasis {
                pulse: app.pulse == Some((row, column)),
                flipping: flipping == Some((row, column)),
                shaking,
            };
            render_tile(f, board.cell(row, column), emphasis, theme, metrics, rect);
        }

        let mid = y + metrics.tile_height / 2;
        if let Some(left) = geometry.left_arrow(area).filter(|_| columns.start > 0) {
            f.render_widget(
                Paragraph::new("◀").style(indicator),
                Rect::new(left, mid, 1, 1),
            );
        }
        if let Some(right) = geometry
            .right_arrow(area, x_row)
            .filter(|_| columns.end < total)
        {
            f.render_widget(
                Paragraph::new("▶").style(indicator),
                Rect::new(right, mid, 1, 1),
            );
        }
    }
}

fn render_tile(
    f: &mut Frame,
    cell: Cell,
    emphasis: Emphasis,
    theme: &Theme,
    metrics: Metrics,
    rect: Rect,
) {
    let paint = cell.paint();
    if paint == CellPaint::Space {
        return;
    }
    let style = theme.tile(paint);

    if metrics.compact() {
        let (text, mut style) = match cell.letter {
            Some(letter) => (letter.to_string(), style),
            None => ("·".to_string(), style.fg(theme.border)),
        };
        if emphasis.pulse || emphasis.flipping {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if emphasis.shaking {
            style = style.fg(theme.error);
        }
        let tile = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(tile, rect);
        return;
    }

    let mut border = theme.tile_border(paint);
    let mut border_type = BorderType::Plain;
    if paint == CellPaint::Blank && cell.letter.is_some() {
        border = border.fg(theme.muted);
    }
    if emphasis.pulse {
        border = border.fg(theme.accent);
        border_type = BorderType::Thick;
    }
    if emphasis.flipping {
        border = border.fg(theme.accent);
        border_type = BorderType::Double;
    }
    if emphasis.shaking {
        border = border.fg(theme.error);
    }

    let letter = cell.letter.map(String::from).unwrap_or_default();
    let tile = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border),
        );
    f.render_widget(tile, rect);
}

fn render_status<P: WordProvider, C: Clock>(
    f: &mut Frame,
    app: &App<P, C>,
    board: &Board<'_>,
    theme: &Theme,
    area: Rect,
) {
    let text = app
        .sequencer
        .last_revealed()
        .filter(|_| app.announce)
        .map(|(row, column)| board.label(row, column))
        .unwrap_or_default();
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.base().fg(theme.muted));
    f.render_widget(status, area);
}

fn render_keyboard<P: WordProvider, C: Clock>(
    f: &mut Frame,
    app: &App<P, C>,
    game: &Game,
    theme: &Theme,
    metrics: Metrics,
    area: Rect,
) {
    let rows: Vec<&str> = game.submitted_rows().collect();
    let statuses = key_statuses(&app.layout, rows.iter().copied(), game.target());

    for (rect, key) in key_rects(area, &app.layout, metrics) {
        let status = match key {
            Key::Letter(letter) => statuses.get(&letter).copied().unwrap_or_default(),
            Key::Enter | Key::Backspace => TileState::Unset,
        };
        let label = key.label();
        let lines = if metrics.compact() {
            vec![Line::from(label)]
        } else {
            vec![Line::default(), Line::from(label)]
        };
        let button = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(theme.key(status));
        f.render_widget(button, rect);
    }
}

fn render_help<P: WordProvider, C: Clock>(
    f: &mut Frame,
    app: &App<P, C>,
    theme: &Theme,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let help = Paragraph::new("Enter: Submit | Alt+←→: Scroll | ^N: New | ^T: Theme | Esc: Quit")
        .alignment(Alignment::Center)
        .style(theme.base().fg(theme.muted));
    f.render_widget(help, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(theme.base());
    f.render_widget(stats, chunks[1]);
}

fn render_modal(f: &mut Frame, game: &Game, theme: &Theme, area: Rect) {
    let guesses = game.guesses_used();
    let (title, headline) = match game.status() {
        GameStatus::Won if guesses == 1 => {
            (" Congratulations! ", "Solved in 1 guess".to_string())
        }
        GameStatus::Won => (" Congratulations! ", format!("Solved in {guesses} guesses")),
        GameStatus::Lost | GameStatus::InProgress => {
            (" Game Over ", "Out of guesses".to_string())
        }
    };

    let content = vec![
        Line::from(headline),
        Line::default(),
        Line::from("The word was"),
        Line::from(Span::styled(
            game.target().text().to_string(),
            Style::default()
                .fg(theme.correct)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(game.definition().to_string()),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to play again",
            Style::default().fg(theme.muted),
        )),
    ];

    let popup = centered_rect(area, 44, 11);
    let modal = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.base())
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(modal, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
