//! Tree operations: insert, remove, walk, connectivity.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};
use tracing::warn;

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The central DOM tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// A node that exists in the arena but does not reach the root is *detached*:
/// it cannot hold focus and cannot host a trap.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root. Otherwise the
    /// node stays detached until it is attached with [`Dom::reparent`].
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Detach `node` (with its subtree) from its parent without destroying it.
    ///
    /// The node keeps its id; it simply stops being connected to the root.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }
    }

    /// Move `node` to become the last child of `new_parent`.
    ///
    /// Returns `false` and leaves the tree untouched when either node is
    /// missing or `new_parent` lies inside `node`'s own subtree, since the
    /// move would create a parent cycle. Moving the root under a detached
    /// node leaves the document without a root.
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) -> bool {
        if !self.nodes.contains_key(node) || !self.nodes.contains_key(new_parent) {
            warn!(node = ?node, new_parent = ?new_parent, "reparent: unknown node");
            return false;
        }
        if self.is_inclusive_descendant(new_parent, node) {
            warn!(node = ?node, new_parent = ?new_parent, "reparent: target is inside the moved subtree");
            return false;
        }

        self.detach(node);
        self.parent.insert(node, new_parent);
        if let Some(siblings) = self.children.get_mut(new_parent) {
            siblings.push(node);
        }
        if self.root == Some(node) {
            self.root = None;
        }
        true
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the topmost ancestor, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `node` lies in the subtree rooted at `ancestor` (inclusive).
    pub fn is_inclusive_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        node == ancestor || self.ancestors(node).contains(&ancestor)
    }

    /// Whether `id` exists and is connected to the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        self.nodes.contains_key(id) && self.is_inclusive_descendant(id, root)
    }

    /// Whether `id` and every ancestor are visible.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .all(|n| self.nodes.get(n).is_some_and(|data| data.visible))
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the DOM, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the DOM is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the DOM contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start` (document order).
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev());
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dom")
            .field("len", &self.nodes.len())
            .field("root", &self.root)
            .finish()
    }
}
