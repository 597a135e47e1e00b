//! Composite character hierarchy.
//!
//! A lightweight host-side model of a multi-mesh character:
//! - Node: a named sub-component, optionally carrying an animation source
//! - Character: the node tree, enumerable depth-first by the animator

pub mod node;
pub mod character;

pub use node::Node;
pub use character::Character;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
}
