//! Automated animation preview.
//!
//! - [`PreviewSettings`]: bookend poses, repetition count and per-phase
//!   speed / blend times
//! - [`Sequencer`]: the state machine choosing the next animation each time a
//!   cycle completes
//! - [`PreviewRunner`]: a host loop ticking the animator until the sequence
//!   reports completion

pub mod settings;
pub mod sequencer;
pub mod runner;

pub use settings::{PhaseParams, PhaseTable, PreviewPhase, PreviewSettings};
pub use sequencer::{PlaybackStep, Sequencer, SequencerState};
pub use runner::{PlaybackReport, PreviewRunner, DEFAULT_MAX_FRAMES};
