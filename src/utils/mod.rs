//! Utility Module
//!
//! - [`time`]: tick sources that feed frame deltas to the animator
//!   ([`FixedStep`] for deterministic playback, [`Timer`] for wall-clock
//!   playback)

pub mod time;

pub use time::{FixedStep, TickSource, Timer};
