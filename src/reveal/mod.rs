//! Reveal sequencing and presentation timers

pub mod scheduler;
pub mod sequencer;

pub use scheduler::{Clock, ManualClock, SystemClock, TimerId, TimerQueue};
pub use sequencer::{
    RevealEvent, RevealRequest, RevealSequencer, RevealTimer, SHAKE_DURATION, Tile, step_delay,
};
