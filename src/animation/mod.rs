pub mod action;
pub mod clip;
pub mod source;
pub mod track;
pub mod listener;
pub mod animator;

pub use action::{CrossFade, LoopMode, PlaybackChannel};
pub use clip::{AnimationClip, AnimationLibrary};
pub use source::{AnimationSource, CharacterHierarchy};
pub use track::{AnimationTrack, TrackKey};
pub use listener::AnimationListener;
pub use animator::CharacterAnimator;
