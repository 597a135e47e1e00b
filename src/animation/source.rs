//! Capabilities the animator needs from its host.
//!
//! The animator never walks a concrete scene graph. A host exposes its
//! character through [`CharacterHierarchy`], and each sub-component that can
//! be animated hands out an [`AnimationSource`].

use std::sync::Arc;

/// Read-only view of the animations one sub-mesh can play.
pub trait AnimationSource {
    /// Names of every animation this source contains.
    fn animation_names(&self) -> Vec<&str>;

    /// Length in seconds of `name`, or `None` if the source lacks it.
    fn animation_duration(&self, name: &str) -> Option<f32>;

    fn has_animation(&self, name: &str) -> bool {
        self.animation_duration(name).is_some()
    }
}

/// A composite character whose sub-components can be enumerated.
pub trait CharacterHierarchy {
    /// Visits every sub-component depth-first, passing its name and its
    /// animation source if it has one.
    fn visit_depth_first(&self, visitor: &mut dyn FnMut(&str, Option<Arc<dyn AnimationSource>>));
}
