//! Node storage for the Koa Trie.
//!
//! Nodes live in a slab arena and refer to each other through opaque
//! [`NodeId`] handles: children as a code-point-to-id map, the parent as a
//! plain back-index. Keeping the links as indices instead of owning pointers
//! breaks the parent/child reference cycle while preserving O(1) upward
//! walks for removal's pruning loop.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use slab::Slab;

/// Map of code points to child node handles.
pub(crate) type ChildMap = HashMap<char, NodeId, FnvBuildHasher>;

/// Opaque handle to a node within a trie's arena.
///
/// Handles are only meaningful for the trie that produced them, and a handle
/// may dangle once the word it was returned for has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node in the Koa Trie.
///
/// Each node matches one code point of a key path. The concatenation of code
/// points from the root to a node is the prefix that node represents.
#[derive(Debug)]
pub(crate) struct Node<V> {
    /// Code point this node matches; meaningless on the root.
    pub(crate) key: char,

    /// Back-index to the parent node; `None` only on the root.
    pub(crate) parent: Option<NodeId>,

    /// Child nodes, keyed by code point.
    pub(crate) children: ChildMap,

    /// Whether a stored word ends exactly at this node.
    pub(crate) is_terminal: bool,

    /// True only for the trie's single root node.
    pub(crate) is_root: bool,

    /// Payload attached when the word ending here was inserted.
    pub(crate) payload: Option<V>,
}

impl<V> Node<V> {
    fn root() -> Self {
        Self {
            key: '\0',
            parent: None,
            children: ChildMap::default(),
            is_terminal: false,
            is_root: true,
            payload: None,
        }
    }

    fn child(key: char, parent: NodeId) -> Self {
        Self {
            key,
            parent: Some(parent),
            children: ChildMap::default(),
            is_terminal: false,
            is_root: false,
            payload: None,
        }
    }
}

/// Outcome of [`NodeArena::add_child`].
///
/// Lets the caller distinguish "path already existed" from "path newly
/// created", which matters for detecting duplicate insertion at the final
/// code point of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddChild {
    /// The child for the code point was already present; nothing changed.
    Found(NodeId),

    /// A new non-terminal child was created and linked.
    Added(NodeId),
}

impl AddChild {
    /// The child handle, whichever way it was obtained.
    pub(crate) fn id(self) -> NodeId {
        match self {
            AddChild::Found(id) | AddChild::Added(id) => id,
        }
    }
}

/// Arena of trie nodes addressed by [`NodeId`].
///
/// The slab guarantees that a node's id stays stable for its whole lifetime,
/// so parent back-indices never need fixing up.
#[derive(Debug)]
pub(crate) struct NodeArena<V> {
    nodes: Slab<Node<V>>,
}

impl<V> NodeArena<V> {
    /// Creates an arena holding only a fresh root node.
    pub(crate) fn new() -> (Self, NodeId) {
        let mut nodes = Slab::new();
        let root = NodeId(nodes.insert(Node::root()));
        (Self { nodes }, root)
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn try_get(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.0)
    }

    /// Total number of live nodes, root included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the existing child of `parent` for `key`, or creates and
    /// links a fresh non-terminal one.
    ///
    /// Terminal flags of existing nodes are never touched here: a node keeps
    /// its stored-word status no matter how many children it gains.
    pub(crate) fn add_child(&mut self, parent: NodeId, key: char) -> AddChild {
        if let Some(&existing) = self.nodes[parent.0].children.get(&key) {
            return AddChild::Found(existing);
        }

        let child = NodeId(self.nodes.insert(Node::child(key, parent)));
        self.nodes[parent.0].children.insert(key, child);
        AddChild::Added(child)
    }

    /// Detaches the child of `parent` at `key` and frees it. No-op if the
    /// child is absent.
    ///
    /// The caller must only detach childless nodes, otherwise the detached
    /// subtree would linger in the arena unreachable.
    pub(crate) fn remove_child(&mut self, parent: NodeId, key: char) {
        if let Some(child) = self.nodes[parent.0].children.remove(&key) {
            debug_assert!(
                self.nodes[child.0].children.is_empty(),
                "detached node still has children"
            );
            self.nodes.remove(child.0);
        }
    }

    /// Sets or clears the terminal flag; children are untouched.
    pub(crate) fn set_terminal(&mut self, id: NodeId, terminal: bool) {
        self.nodes[id.0].is_terminal = terminal;
    }

    /// Children of `id` in ascending code-point order.
    ///
    /// The child map itself iterates in arbitrary order; every traversal
    /// that must be deterministic goes through this.
    pub(crate) fn sorted_children(&self, id: NodeId) -> Vec<(char, NodeId)> {
        let mut children: Vec<(char, NodeId)> = self.nodes[id.0]
            .children
            .iter()
            .map(|(&key, &child)| (key, child))
            .collect();
        children.sort_unstable_by_key(|&(key, _)| key);
        children
    }

    /// Shallow node equality: code point, root and terminal flags, parent
    /// code points (or both parents absent), and immediate child key sets.
    ///
    /// Child subtrees are deliberately not compared; deep equality is
    /// obtained by composing this check from the root downward, where every
    /// node's own check covers its direct children.
    pub(crate) fn shallow_eq(&self, id: NodeId, other: &NodeArena<V>, other_id: NodeId) -> bool {
        let a = &self.nodes[id.0];
        let b = &other.nodes[other_id.0];

        if a.key != b.key || a.is_root != b.is_root || a.is_terminal != b.is_terminal {
            return false;
        }

        match (a.parent, b.parent) {
            (None, None) => {}
            (Some(pa), Some(pb)) => {
                if self.nodes[pa.0].key != other.nodes[pb.0].key {
                    return false;
                }
            }
            _ => return false,
        }

        a.children.len() == b.children.len()
            && a.children.keys().all(|key| b.children.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> (NodeArena<()>, NodeId) {
        NodeArena::new()
    }

    #[test]
    fn test_add_child_creates_then_finds() {
        let (mut nodes, root) = arena();

        let first = nodes.add_child(root, 'a');
        assert!(matches!(first, AddChild::Added(_)));

        let second = nodes.add_child(root, 'a');
        assert!(matches!(second, AddChild::Found(_)));
        assert_eq!(first.id(), second.id());
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_added_children_are_non_terminal_and_linked() {
        let (mut nodes, root) = arena();

        let child = nodes.add_child(root, 'x').id();
        let node = nodes.get(child);
        assert!(!node.is_terminal);
        assert!(!node.is_root);
        assert_eq!(node.key, 'x');
        assert_eq!(node.parent, Some(root));
    }

    #[test]
    fn test_add_child_never_clears_terminal() {
        let (mut nodes, root) = arena();

        let child = nodes.add_child(root, 'a').id();
        nodes.set_terminal(child, true);

        // Gaining a grandchild must not erase the stored-word marker.
        nodes.add_child(child, 'b');
        assert!(nodes.get(child).is_terminal);
    }

    #[test]
    fn test_remove_child_detaches_and_frees() {
        let (mut nodes, root) = arena();

        nodes.add_child(root, 'a');
        assert_eq!(nodes.len(), 2);

        nodes.remove_child(root, 'a');
        assert_eq!(nodes.len(), 1);
        assert!(nodes.get(root).children.is_empty());

        // Absent key is a no-op.
        nodes.remove_child(root, 'a');
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_sorted_children_ascending() {
        let (mut nodes, root) = arena();

        for key in ['c', 'a', 'b'] {
            nodes.add_child(root, key);
        }

        let keys: Vec<char> = nodes
            .sorted_children(root)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_shallow_eq_matches_same_shape() {
        let (mut left, left_root) = arena();
        let (mut right, right_root) = arena();

        let la = left.add_child(left_root, 'a').id();
        let ra = right.add_child(right_root, 'a').id();
        left.add_child(la, 'b');
        right.add_child(ra, 'b');

        assert!(left.shallow_eq(left_root, &right, right_root));
        assert!(left.shallow_eq(la, &right, ra));
    }

    #[test]
    fn test_shallow_eq_rejects_flag_and_key_mismatches() {
        let (mut left, left_root) = arena();
        let (mut right, right_root) = arena();

        let la = left.add_child(left_root, 'a').id();
        let ra = right.add_child(right_root, 'a').id();

        // Terminal flag differs.
        left.set_terminal(la, true);
        assert!(!left.shallow_eq(la, &right, ra));
        right.set_terminal(ra, true);
        assert!(left.shallow_eq(la, &right, ra));

        // Child key sets differ.
        left.add_child(la, 'x');
        right.add_child(ra, 'y');
        assert!(!left.shallow_eq(la, &right, ra));
    }

    #[test]
    fn test_shallow_eq_ignores_grandchildren() {
        let (mut left, left_root) = arena();
        let (mut right, right_root) = arena();

        let la = left.add_child(left_root, 'a').id();
        let ra = right.add_child(right_root, 'a').id();
        let lb = left.add_child(la, 'b').id();
        right.add_child(ra, 'b');

        // Differing subtrees below the direct children are invisible here.
        left.add_child(lb, 'z');
        assert!(left.shallow_eq(la, &right, ra));
    }
}
