//! Koa Trie: a compact prefix tree over Unicode code points.
//!
//! This module provides an in-memory trie for exact-word storage and
//! retrieval. Each node matches one code point; a word is present exactly
//! when the path spelled by its code points ends at a terminal node. An
//! optional opaque payload can be attached to every stored word.
//!
//! Mutation goes through `&mut self`, so exclusive access is enforced by the
//! borrow checker; there is no internal synchronization and no blocking.
//! All per-word operations are O(word length).
//!
//! # Example
//!
//! ```
//! use koa_trie_lib::trie::Trie;
//!
//! let mut trie = Trie::<u32>::new();
//! trie.add_with_payload("cat", 7).unwrap();
//! trie.add("cab").unwrap();
//!
//! let node = trie.find("cat").unwrap();
//! assert_eq!(node.payload(), Some(&7));
//!
//! trie.remove("cab").unwrap();
//! assert_eq!(trie.words(), vec!["cat".to_string()]);
//! ```

mod error;
mod node;
mod render;

use std::fmt;

pub use error::TrieError;
pub use node::NodeId;
pub use render::TreeRenderer;

use node::{AddChild, NodeArena};

/// Result type for Koa Trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// Display name used when a trie is created without one.
const DEFAULT_NAME: &str = "Trie";

/// A compact trie over sequences of Unicode code points.
///
/// The trie owns all of its nodes in an arena; words are added with
/// [`Trie::add`], looked up with [`Trie::find`], and removed (with upward
/// pruning of dead branches) with [`Trie::remove`]. [`Trie::words`]
/// enumerates the stored words and [`Trie::root`] starts the ordered
/// read-only walk that [`TreeRenderer`] consumes.
#[derive(Debug)]
pub struct Trie<V = ()> {
    /// Display name, used as the render header.
    name: String,

    /// Node storage; every id below points into this arena.
    nodes: NodeArena<V>,

    /// Handle of the root node. The root is created at construction and
    /// never removed.
    root: NodeId,
}

impl<V> Trie<V> {
    /// Creates an empty trie with the default display name.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_NAME)
    }

    /// Creates an empty trie with the given display name. An empty name
    /// falls back to the default.
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = DEFAULT_NAME.to_string();
        }
        let (nodes, root) = NodeArena::new();
        Self { name, nodes, root }
    }

    /// The trie's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a word to the trie without a payload.
    ///
    /// # Errors
    ///
    /// * [`TrieError::EmptyWord`] if `word` has no code points.
    /// * [`TrieError::DuplicateWord`] if the word is already stored; the
    ///   trie is left unchanged.
    pub fn add<W: AsRef<str>>(&mut self, word: W) -> TrieResult<NodeId> {
        self.insert_path(word.as_ref(), None)
    }

    /// Adds a word and attaches `payload` to its terminal node, overwriting
    /// any payload a previous insertion left there.
    ///
    /// # Errors
    ///
    /// Same as [`Trie::add`]; on [`TrieError::DuplicateWord`] the existing
    /// payload is kept.
    pub fn add_with_payload<W: AsRef<str>>(&mut self, word: W, payload: V) -> TrieResult<NodeId> {
        self.insert_path(word.as_ref(), Some(payload))
    }

    fn insert_path(&mut self, word: &str, payload: Option<V>) -> TrieResult<NodeId> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let mut current = self.root;
        let mut final_step_created = false;
        for key in word.chars() {
            let outcome = self.nodes.add_child(current, key);
            final_step_created = matches!(outcome, AddChild::Added(_));
            current = outcome.id();
        }

        // Duplicate detection happens before the terminal flag or payload is
        // committed. Interior nodes created on the way down stay either way;
        // they are implied by the words sharing this prefix.
        if !final_step_created && self.nodes.get(current).is_terminal {
            return Err(TrieError::DuplicateWord(word.to_string()));
        }

        self.nodes.set_terminal(current, true);
        self.nodes.get_mut(current).payload = payload;
        Ok(current)
    }

    /// Looks up a word and returns a read-only handle to its terminal node.
    ///
    /// # Errors
    ///
    /// * [`TrieError::EmptyWord`] if `word` has no code points.
    /// * [`TrieError::NotFound`] if the path is absent at any step, or fully
    ///   present but not terminated; the error carries the longest matched
    ///   prefix either way.
    pub fn find<W: AsRef<str>>(&self, word: W) -> TrieResult<NodeRef<'_, V>> {
        let id = self.resolve_terminal(word.as_ref())?;
        Ok(NodeRef { trie: self, id })
    }

    /// Checks whether a word is stored.
    ///
    /// Maps [`TrieError::NotFound`] to `Ok(false)`; an empty word is still
    /// an error.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> TrieResult<bool> {
        match self.find(word) {
            Ok(_) => Ok(true),
            Err(TrieError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Removes a stored word, pruning ancestors that no longer serve any
    /// word.
    ///
    /// The walk goes upward from the removed terminal: a non-terminal,
    /// non-root node without children is detached from its parent, and the
    /// walk continues from that parent. It stops at a terminal node (still a
    /// valid shorter word), a node with remaining children (needed by
    /// siblings), or the root.
    ///
    /// # Errors
    ///
    /// * [`TrieError::EmptyWord`] if `word` has no code points.
    /// * [`TrieError::NotFound`] if the word is not currently stored.
    pub fn remove<W: AsRef<str>>(&mut self, word: W) -> TrieResult<()> {
        let target = self.resolve_terminal(word.as_ref())?;

        self.nodes.set_terminal(target, false);
        self.nodes.get_mut(target).payload = None;

        let mut current = target;
        loop {
            let node = self.nodes.get(current);
            if node.is_terminal || node.is_root || !node.children.is_empty() {
                break;
            }
            let Some(parent) = node.parent else {
                break;
            };
            let key = node.key;
            self.nodes.remove_child(parent, key);
            current = parent;
        }

        Ok(())
    }

    /// Walks the path of `word` and returns its terminal node id.
    fn resolve_terminal(&self, word: &str) -> TrieResult<NodeId> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let mut current = self.root;
        let mut matched = String::new();
        for key in word.chars() {
            match self.nodes.get(current).children.get(&key) {
                Some(&child) => {
                    matched.push(key);
                    current = child;
                }
                None => {
                    return Err(TrieError::NotFound {
                        word: word.to_string(),
                        matched_prefix: matched,
                    });
                }
            }
        }

        if !self.nodes.get(current).is_terminal {
            // The whole path exists but no word ends here; the matched
            // prefix equals the word, which is the diagnostic for that.
            return Err(TrieError::NotFound {
                word: word.to_string(),
                matched_prefix: matched,
            });
        }

        Ok(current)
    }

    /// Every stored word, eagerly collected.
    ///
    /// Children are visited in ascending code-point order, so repeated calls
    /// on an unchanged trie yield identical output.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        self.collect_words(self.root, String::new(), &mut words);
        words
    }

    fn collect_words(&self, id: NodeId, prefix: String, words: &mut Vec<String>) {
        if self.nodes.get(id).is_terminal {
            words.push(prefix.clone());
        }

        for (key, child) in self.nodes.sorted_children(id) {
            let mut next = prefix.clone();
            next.push(key);
            self.collect_words(child, next, words);
        }
    }

    /// Number of stored words. Walks the whole trie, O(size).
    pub fn len(&self) -> usize {
        self.count_terminals(self.root)
    }

    fn count_terminals(&self, id: NodeId) -> usize {
        let node = self.nodes.get(id);
        let mut count = usize::from(node.is_terminal);
        for &child in node.children.values() {
            count += self.count_terminals(child);
        }
        count
    }

    /// True when no word is stored.
    pub fn is_empty(&self) -> bool {
        let root = self.nodes.get(self.root);
        root.children.is_empty() && !root.is_terminal
    }

    /// Read-only handle to the root node, the entry point of the ordered
    /// parent-to-children walk.
    pub fn root(&self) -> NodeRef<'_, V> {
        NodeRef {
            trie: self,
            id: self.root,
        }
    }

    /// Resolves a handle previously returned by [`Trie::add`]. Returns
    /// `None` if the node has since been pruned away.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, V>> {
        self.nodes.try_get(id).map(|_| NodeRef { trie: self, id })
    }

    /// Renders the trie with the default [`TreeRenderer`].
    pub fn render(&self) -> String {
        TreeRenderer::new().render(self)
    }

    fn structural_eq(&self, id: NodeId, other: &Trie<V>, other_id: NodeId) -> bool {
        if !self.nodes.shallow_eq(id, &other.nodes, other_id) {
            return false;
        }

        // Shallow equality already guarantees identical child key sets.
        for (key, child) in self.nodes.sorted_children(id) {
            let Some(&other_child) = other.nodes.get(other_id).children.get(&key) else {
                return false;
            };
            if !self.structural_eq(child, other, other_child) {
                return false;
            }
        }

        true
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same node shape, flags, and code points from the
/// root down. Names and payloads are not compared.
impl<V> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(self.root, other, other.root)
    }
}

impl<V> fmt::Display for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Read-only handle to one node of a [`Trie`].
///
/// Exposes the node's label, flags, payload, and an ordered walk over its
/// children; this is the only surface a rendering consumer needs.
#[derive(Debug)]
pub struct NodeRef<'a, V> {
    trie: &'a Trie<V>,
    id: NodeId,
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<'a, V> NodeRef<'a, V> {
    /// The code point this node matches; `None` on the root.
    pub fn key(&self) -> Option<char> {
        let node = self.trie.nodes.get(self.id);
        if node.is_root {
            None
        } else {
            Some(node.key)
        }
    }

    /// Whether a stored word ends exactly here.
    pub fn is_terminal(&self) -> bool {
        self.trie.nodes.get(self.id).is_terminal
    }

    /// Whether this is the trie's root node.
    pub fn is_root(&self) -> bool {
        self.trie.nodes.get(self.id).is_root
    }

    /// The payload attached to this node, if any.
    pub fn payload(&self) -> Option<&'a V> {
        self.trie.nodes.get(self.id).payload.as_ref()
    }

    /// Handle to the parent node; `None` on the root.
    pub fn parent(&self) -> Option<NodeRef<'a, V>> {
        let trie = self.trie;
        self.trie
            .nodes
            .get(self.id)
            .parent
            .map(|id| NodeRef { trie, id })
    }

    /// Children in ascending code-point order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, V>> {
        let trie = self.trie;
        trie.nodes
            .sorted_children(self.id)
            .into_iter()
            .map(move |(_, id)| NodeRef { trie, id })
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.trie.nodes.get(self.id).children.len()
    }

    /// Number of nodes below this one, excluding itself.
    pub fn descendant_count(&self) -> usize {
        self.children()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// The prefix this node represents: the code points from the root down
    /// to and including this node. Empty on the root.
    pub fn prefix(&self) -> String {
        let mut keys = Vec::new();
        let mut current = *self;
        loop {
            match current.key() {
                Some(key) => keys.push(key),
                None => break,
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        keys.iter().rev().collect()
    }
}

/// Shallow equality per node: code point, flags, parent code points, and
/// immediate child key sets. Subtrees below direct children are not
/// compared.
impl<V> PartialEq for NodeRef<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.trie
            .nodes
            .shallow_eq(self.id, &other.trie.nodes, other.id)
    }
}
