//! Tile-by-tile reveal of a submitted row
//!
//! The sequencer walks the columns of one row left to right. Space columns
//! are revealed immediately; every other column waits for its flip delay
//! before its color is shown, and only then is the next column armed. After
//! the last column one more delay elapses before the row is reported
//! complete.

use super::scheduler::{Clock, TimerId, TimerQueue};
use crate::core::{TargetWord, TileState, classify};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Length of the shake cue on a rejected row
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Timer events owned by the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTimer {
    /// The pending reveal step of sequence `epoch` is due
    Step { epoch: u64 },
    /// The active shake is over
    ShakeEnd,
}

/// What to reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealRequest<'a> {
    Row {
        row: usize,
        guess: &'a str,
        target: &'a TargetWord,
    },
    /// Drop all reveal state without reporting completion
    Reset,
}

/// Notification produced by the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    RowComplete { row: usize },
}

/// Classification of a tile plus whether its color is visible yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub state: TileState,
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Classify columns starting here until one needs a delay
    Scan(usize),
    /// Waiting for the flip delay of this column
    Flipping(usize),
    /// Waiting for the final delay after the last column
    Settling,
}

#[derive(Debug, Clone)]
struct ActiveReveal {
    row: usize,
    letters: Vec<char>,
    target: TargetWord,
    stage: Stage,
}

/// Delay before the flip of column `step` settles, in milliseconds
///
/// Longer words start faster, and every column speeds up a little more, down
/// to a floor of 40 ms.
#[must_use]
pub fn step_delay(word_len: usize, step: usize) -> Duration {
    let word_len = word_len as i64;
    let base = (200 - (word_len - 5) * 10).max(80);
    let delay = (base - step as i64 * 15).max(40);
    Duration::from_millis(delay as u64)
}

/// Drives one row at a time through its reveal
#[derive(Debug, Default)]
pub struct RevealSequencer {
    tiles: FxHashMap<(usize, usize), Tile>,
    active: Option<ActiveReveal>,
    pending: Option<TimerId>,
    epoch: u64,
    last_revealed: Option<(usize, usize)>,
    shaking: Option<usize>,
}

impl RevealSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start revealing `guess` in a row, or reset everything
    ///
    /// Starting a row while another one is still revealing abandons the old
    /// sequence. A reset also clears every recorded tile.
    pub fn reveal_row<E, C>(
        &mut self,
        request: RevealRequest<'_>,
        timers: &mut TimerQueue<E, C>,
    ) -> Option<RevealEvent>
    where
        E: From<RevealTimer>,
        C: Clock,
    {
        self.abandon(timers);

        match request {
            RevealRequest::Reset => {
                self.tiles.clear();
                self.last_revealed = None;
                None
            }
            RevealRequest::Row { row, guess, target } => {
                self.tiles.retain(|&(tile_row, _), _| tile_row != row);
                self.active = Some(ActiveReveal {
                    row,
                    letters: guess.chars().collect(),
                    target: target.clone(),
                    stage: Stage::Scan(0),
                });
                self.advance(timers)
            }
        }
    }

    /// Handle a fired timer
    ///
    /// Step events from an abandoned sequence are ignored.
    pub fn on_timer<E, C>(
        &mut self,
        timer: RevealTimer,
        timers: &mut TimerQueue<E, C>,
    ) -> Option<RevealEvent>
    where
        E: From<RevealTimer>,
        C: Clock,
    {
        match timer {
            RevealTimer::Step { epoch } if epoch == self.epoch => {
                self.pending = None;
                self.advance(timers)
            }
            RevealTimer::Step { epoch } => {
                tracing::trace!(epoch, current = self.epoch, "stale reveal step ignored");
                None
            }
            RevealTimer::ShakeEnd => {
                self.shaking = None;
                None
            }
        }
    }

    /// Move the active reveal forward by one transition
    ///
    /// Runs through space columns inline and stops at the first column that
    /// needs a delay, arming a single timer for it.
    pub fn advance<E, C>(&mut self, timers: &mut TimerQueue<E, C>) -> Option<RevealEvent>
    where
        E: From<RevealTimer>,
        C: Clock,
    {
        let active = self.active.as_mut()?;
        let word_len = active.target.len();

        loop {
            match active.stage {
                Stage::Scan(column) if column < word_len => {
                    let letter = active.letters.get(column).copied().unwrap_or(' ');
                    let state = classify(column, letter, &active.target);
                    let key = (active.row, column);

                    if state == TileState::Space {
                        self.tiles.insert(
                            key,
                            Tile {
                                state,
                                revealed: true,
                            },
                        );
                        active.stage = Stage::Scan(column + 1);
                        continue;
                    }

                    self.tiles.insert(
                        key,
                        Tile {
                            state,
                            revealed: false,
                        },
                    );
                    active.stage = Stage::Flipping(column);
                    let delay = step_delay(word_len, column);
                    self.pending =
                        Some(timers.schedule(delay, RevealTimer::Step { epoch: self.epoch }.into()));
                    return None;
                }
                Stage::Scan(_) => {
                    active.stage = Stage::Settling;
                    let delay = step_delay(word_len, word_len);
                    self.pending =
                        Some(timers.schedule(delay, RevealTimer::Step { epoch: self.epoch }.into()));
                    return None;
                }
                Stage::Flipping(column) => {
                    let key = (active.row, column);
                    if let Some(tile) = self.tiles.get_mut(&key) {
                        tile.revealed = true;
                    }
                    self.last_revealed = Some(key);
                    active.stage = Stage::Scan(column + 1);
                }
                Stage::Settling => {
                    let row = active.row;
                    self.active = None;
                    tracing::debug!(row, "row reveal complete");
                    return Some(RevealEvent::RowComplete { row });
                }
            }
        }
    }

    /// Start a shake on `row`; a no-op while a shake is running
    ///
    /// Returns whether a new shake started.
    pub fn shake_row<E, C>(&mut self, row: usize, timers: &mut TimerQueue<E, C>) -> bool
    where
        E: From<RevealTimer>,
        C: Clock,
    {
        if self.shaking.is_some() {
            return false;
        }
        self.shaking = Some(row);
        timers.schedule(SHAKE_DURATION, RevealTimer::ShakeEnd.into());
        true
    }

    /// Recorded tile for a cell, revealed or not
    #[must_use]
    pub fn tile(&self, row: usize, column: usize) -> Option<Tile> {
        self.tiles.get(&(row, column)).copied()
    }

    /// Row currently being revealed
    #[must_use]
    pub fn revealing_row(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.row)
    }

    /// Cell whose flip is in progress
    #[must_use]
    pub fn flipping_tile(&self) -> Option<(usize, usize)> {
        self.active.as_ref().and_then(|active| match active.stage {
            Stage::Flipping(column) => Some((active.row, column)),
            Stage::Scan(_) | Stage::Settling => None,
        })
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub const fn last_revealed(&self) -> Option<(usize, usize)> {
        self.last_revealed
    }

    #[must_use]
    pub const fn shaking_row(&self) -> Option<usize> {
        self.shaking
    }

    fn abandon<E, C: Clock>(&mut self, timers: &mut TimerQueue<E, C>) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
        if self.active.take().is_some() {
            tracing::debug!(epoch = self.epoch, "reveal abandoned");
        }
        self.epoch += 1;
    }
}
