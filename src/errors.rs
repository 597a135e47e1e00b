//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`MarionetteError`] covers the failure modes that are
//! surfaced to the host:
//! - Playback configuration errors (missing completion listener)
//! - Preview settings loading and validation errors
//! - Preview host loop budget errors
//!
//! Sparse animation coverage is *not* an error: sub-meshes without an
//! animation source are simply not tracked, and tracks lacking a requested
//! animation are skipped.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, MarionetteError>`.
//!
//! ```rust,ignore
//! use marionette::errors::Result;
//!
//! fn tick(animator: &mut CharacterAnimator, dt: f32) -> Result<()> {
//!     animator.update(dt)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum MarionetteError {
    // ========================================================================
    // Playback Errors
    // ========================================================================
    /// A non-looping cycle completed but nobody was registered to hear it.
    #[error("Animation cycle of {animation:?} completed with no listener registered")]
    ListenerNotRegistered {
        /// The logical animation whose cycle completed
        animation: Option<String>,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Preview settings failed validation.
    #[error("Invalid preview settings: {0}")]
    InvalidSettings(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================================================
    // Host Loop Errors
    // ========================================================================
    /// The preview loop ran out of frames before the sequence finished.
    #[error("Preview did not finish within {frames} frames")]
    FrameLimitExceeded {
        /// The frame budget that was exhausted
        frames: u64,
    },
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
