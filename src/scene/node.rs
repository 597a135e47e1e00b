use std::sync::Arc;

use crate::animation::AnimationSource;
use crate::scene::NodeKey;

/// A named sub-component of a character.
///
/// # Hierarchy
///
/// Nodes form a tree structure through parent-child relationships:
/// - `parent`: Optional key of the parent node (None for root nodes)
/// - `children`: List of child node keys
///
/// A node carries an animation source only if it can be animated on its own
/// (a skinned body, a cape, a weapon with its own rig).
#[derive(Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,

    pub animations: Option<Arc<dyn AnimationSource>>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            animations: None,
        }
    }

    /// Creates a node carrying `animations`.
    pub fn animated(name: impl Into<String>, animations: impl AnimationSource + 'static) -> Self {
        Self {
            animations: Some(Arc::new(animations)),
            ..Self::new(name)
        }
    }

    /// Returns the parent node key, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node keys.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animations.is_some()
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("animated", &self.is_animated())
            .finish()
    }
}
