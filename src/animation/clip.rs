use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::animation::source::AnimationSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
        }
    }
}

/// The set of clips exposed by one sub-mesh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationLibrary {
    clips: FxHashMap<String, AnimationClip>,
}

impl AnimationLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library from `(name, duration)` pairs.
    pub fn from_clips<I, S>(clips: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut library = Self::new();
        for (name, duration) in clips {
            library.add_clip(AnimationClip::new(name, duration));
        }
        library
    }

    /// Adds a clip, replacing any clip with the same name.
    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.name.clone(), clip);
    }

    #[must_use]
    pub fn get_clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl AnimationSource for AnimationLibrary {
    fn animation_names(&self) -> Vec<&str> {
        self.clips.keys().map(String::as_str).collect()
    }

    fn animation_duration(&self, name: &str) -> Option<f32> {
        self.clips.get(name).map(|clip| clip.duration)
    }
}
