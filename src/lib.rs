#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod scene;
pub mod preview;
pub mod errors;
pub mod utils;

pub use animation::{AnimationClip, AnimationLibrary, AnimationListener, AnimationSource, AnimationTrack, CharacterAnimator, CharacterHierarchy, LoopMode, PlaybackChannel};
pub use scene::{Character, Node};
pub use preview::{PreviewRunner, PreviewSettings, Sequencer, SequencerState};
pub use errors::{MarionetteError, Result};
pub use utils::{FixedStep, TickSource, Timer};
