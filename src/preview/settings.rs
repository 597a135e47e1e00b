//! Preview Settings & Phase Configuration
//!
//! This module defines the tunable parameters of the preview sequence.
//!
//! The core abstraction is [`PhaseTable`], which maps every phase of the
//! bookend pattern to the speed and cross-fade time it plays with:
//!
//! ```text
//! Rest → Stand → A ×N → Stand → B ×N → Stand → Rest
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use marionette::preview::{PreviewSettings, PhaseParams};
//!
//! // Canonical preview: three repetitions per animation
//! let settings = PreviewSettings::default();
//!
//! // Faster interludes, two repetitions
//! let settings = PreviewSettings {
//!     repeat_target: 2,
//!     ..Default::default()
//! }
//! .with_phase(PreviewPhase::ExitingStand, PhaseParams::new(3.0, 0.25));
//!
//! // Or from JSON; missing fields keep their defaults
//! let settings = PreviewSettings::from_json_str(r#"{ "repeat_target": 5 }"#)?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MarionetteError, Result};

/// Phases of the preview sequence that start a new animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewPhase {
    /// The opening rest pose.
    InitialRest,
    /// The stand pose played after the opening rest.
    EnteringStand,
    /// First play of an animation fresh from the queue.
    BodyFirst,
    /// Replay of the animation that just completed.
    BodyRepeat,
    /// The stand pose separating two body animations.
    ExitingStand,
    /// The closing rest pose.
    FinalRest,
}

/// Speed multiplier and cross-fade time for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseParams {
    pub speed: f32,
    /// Cross-fade duration in seconds (0 switches instantly).
    pub blend_time: f32,
}

impl PhaseParams {
    #[must_use]
    pub const fn new(speed: f32, blend_time: f32) -> Self {
        Self { speed, blend_time }
    }

    fn validate(&self, phase: PreviewPhase) -> Result<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(MarionetteError::InvalidSettings(format!(
                "{phase:?}: speed must be a finite non-negative number, got {}",
                self.speed
            )));
        }
        if !self.blend_time.is_finite() || self.blend_time < 0.0 {
            return Err(MarionetteError::InvalidSettings(format!(
                "{phase:?}: blend time must be a finite non-negative number, got {}",
                self.blend_time
            )));
        }
        Ok(())
    }
}

/// Per-phase playback parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTable {
    pub initial_rest: PhaseParams,
    pub entering_stand: PhaseParams,
    pub body_first: PhaseParams,
    pub body_repeat: PhaseParams,
    pub exiting_stand: PhaseParams,
    pub final_rest: PhaseParams,
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self {
            initial_rest: PhaseParams::new(2.0, 0.0),
            entering_stand: PhaseParams::new(1.0, 1.0),
            body_first: PhaseParams::new(1.0, 0.5),
            body_repeat: PhaseParams::new(1.0, 0.0),
            exiting_stand: PhaseParams::new(2.0, 0.5),
            final_rest: PhaseParams::new(1.0, 1.0),
        }
    }
}

impl PhaseTable {
    #[must_use]
    pub fn get(&self, phase: PreviewPhase) -> PhaseParams {
        match phase {
            PreviewPhase::InitialRest => self.initial_rest,
            PreviewPhase::EnteringStand => self.entering_stand,
            PreviewPhase::BodyFirst => self.body_first,
            PreviewPhase::BodyRepeat => self.body_repeat,
            PreviewPhase::ExitingStand => self.exiting_stand,
            PreviewPhase::FinalRest => self.final_rest,
        }
    }

    pub fn set(&mut self, phase: PreviewPhase, params: PhaseParams) {
        let slot = match phase {
            PreviewPhase::InitialRest => &mut self.initial_rest,
            PreviewPhase::EnteringStand => &mut self.entering_stand,
            PreviewPhase::BodyFirst => &mut self.body_first,
            PreviewPhase::BodyRepeat => &mut self.body_repeat,
            PreviewPhase::ExitingStand => &mut self.exiting_stand,
            PreviewPhase::FinalRest => &mut self.final_rest,
        };
        *slot = params;
    }
}

/// Configuration of the preview sequencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Idle pose that opens and closes the sequence.
    pub rest_pose: String,
    /// Short pose played between animations.
    pub stand_pose: String,
    /// How many times each body animation is played in a row.
    pub repeat_target: u32,
    pub phases: PhaseTable,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            rest_pose: "Rest".to_owned(),
            stand_pose: "Stand".to_owned(),
            repeat_target: 3,
            phases: PhaseTable::default(),
        }
    }
}

impl PreviewSettings {
    #[must_use]
    pub fn with_phase(mut self, phase: PreviewPhase, params: PhaseParams) -> Self {
        self.phases.set(phase, params);
        self
    }

    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads and validates settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading preview settings from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rest_pose.is_empty() || self.stand_pose.is_empty() {
            return Err(MarionetteError::InvalidSettings(
                "bookend pose names must not be empty".to_owned(),
            ));
        }
        if self.rest_pose == self.stand_pose {
            return Err(MarionetteError::InvalidSettings(format!(
                "rest and stand poses must differ, both are '{}'",
                self.rest_pose
            )));
        }
        if self.repeat_target == 0 {
            return Err(MarionetteError::InvalidSettings(
                "repeat_target must be at least 1".to_owned(),
            ));
        }

        for phase in [
            PreviewPhase::InitialRest,
            PreviewPhase::EnteringStand,
            PreviewPhase::BodyFirst,
            PreviewPhase::BodyRepeat,
            PreviewPhase::ExitingStand,
            PreviewPhase::FinalRest,
        ] {
            self.phases.get(phase).validate(phase)?;
        }
        Ok(())
    }
}
