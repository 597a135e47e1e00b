use std::sync::Arc;

use slotmap::SlotMap;

use crate::animation::{AnimationSource, CharacterHierarchy};
use crate::scene::NodeKey;
use crate::scene::node::Node;

/// A composite character: a small tree of named nodes, some of which carry
/// their own animation source.
///
/// This is the host-side representation the animator discovers tracks from;
/// it holds no playback state of its own.
#[derive(Debug, Default)]
pub struct Character {
    pub name: String,

    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Adds a node at the root of the character.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        } else {
            log::error!("Parent node not found, adding '{}' as a root", self.nodes[key].name);
            self.root_nodes.push(key);
            return key;
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
        }

        key
    }

    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Attaches (or replaces) the animation source of a node.
    pub fn set_animations(&mut self, key: NodeKey, animations: Arc<dyn AnimationSource>) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.animations = Some(animations);
        }
    }

    /// Finds the first node called `name`, depth-first.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeKey> {
        self.root_nodes
            .iter()
            .find_map(|&root| self.find_in_subtree(root, name))
    }

    fn find_in_subtree(&self, current: NodeKey, name: &str) -> Option<NodeKey> {
        let node = self.nodes.get(current)?;
        if node.name == name {
            return Some(current);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_in_subtree(child, name))
    }

    fn visit_subtree(
        &self,
        key: NodeKey,
        visitor: &mut dyn FnMut(&str, Option<Arc<dyn AnimationSource>>),
    ) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };
        visitor(&node.name, node.animations.clone());
        for &child in &node.children {
            self.visit_subtree(child, visitor);
        }
    }
}

impl CharacterHierarchy for Character {
    fn visit_depth_first(&self, visitor: &mut dyn FnMut(&str, Option<Arc<dyn AnimationSource>>)) {
        for &root in &self.root_nodes {
            self.visit_subtree(root, visitor);
        }
    }
}
