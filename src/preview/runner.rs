use crate::animation::CharacterAnimator;
use crate::errors::{MarionetteError, Result};
use crate::preview::sequencer::{PlaybackStep, Sequencer};
use crate::utils::time::{FixedStep, TickSource};

/// Frame budget used when none is configured (about 4.6 hours at 60 fps).
pub const DEFAULT_MAX_FRAMES: u64 = 1_000_000;

/// Summary of a finished preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackReport {
    /// Number of frames ticked, including the one that completed the sequence.
    pub frames: u64,
    /// Sum of every frame delta, in seconds.
    pub simulated_seconds: f32,
    /// Every animation the sequencer started, oldest first.
    pub steps: Vec<PlaybackStep>,
}

/// Host loop for an animation preview.
///
/// Owns the animator and the sequencer and feeds the animator one delta per
/// frame from a [`TickSource`]. Completion is reported to the caller instead
/// of ending the process.
///
/// # Lifecycle
///
/// 1. Create with [`PreviewRunner::new`]
/// 2. Either call [`update`](Self::update) once per frame until it returns
///    `true`, or let [`run`](Self::run) drive the whole sequence
pub struct PreviewRunner<T: TickSource = FixedStep> {
    animator: CharacterAnimator,
    sequencer: Sequencer,
    ticks: T,

    max_frames: u64,
    started: bool,
    time: f32,
    frame_count: u64,
}

impl<T: TickSource> PreviewRunner<T> {
    #[must_use]
    pub fn new(animator: CharacterAnimator, sequencer: Sequencer, ticks: T) -> Self {
        Self {
            animator,
            sequencer,
            ticks,
            max_frames: DEFAULT_MAX_FRAMES,
            started: false,
            time: 0.0,
            frame_count: 0,
        }
    }

    /// Limits how many frames [`run`](Self::run) may tick.
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Plays the opening rest pose. Called automatically by the first update.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.sequencer.start(&mut self.animator);
    }

    /// Ticks one frame. Returns `true` once the sequence is complete.
    pub fn update(&mut self) -> Result<bool> {
        self.start();
        if self.sequencer.is_complete() {
            return Ok(true);
        }

        let dt = self.ticks.next_delta();
        self.animator.update_with(dt, &mut self.sequencer)?;

        self.time += dt;
        self.frame_count += 1;

        Ok(self.sequencer.is_complete())
    }

    /// Ticks until the sequence completes or the frame budget runs out.
    pub fn run(&mut self) -> Result<PlaybackReport> {
        self.start();
        while !self.sequencer.is_complete() {
            if self.frame_count >= self.max_frames {
                return Err(MarionetteError::FrameLimitExceeded {
                    frames: self.max_frames,
                });
            }
            self.update()?;
        }

        log::info!(
            "Preview finished after {} frames ({:.2}s simulated)",
            self.frame_count,
            self.time
        );

        Ok(PlaybackReport {
            frames: self.frame_count,
            simulated_seconds: self.time,
            steps: self.sequencer.history().to_vec(),
        })
    }

    #[inline]
    #[must_use]
    pub fn animator(&self) -> &CharacterAnimator {
        &self.animator
    }

    #[inline]
    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Total simulated time in seconds.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
