//! Tree rendering for the Koa Trie.
//!
//! Produces a human-readable nested dump of a trie for inspection and
//! debugging. The renderer consumes only the ordered read-only walk exposed
//! by [`NodeRef`], so any other formatting consumer can be built against the
//! same surface; nothing here reaches into node storage.

use super::{NodeRef, Trie};

/// Renders a trie as a box-drawing tree, one code point per line.
///
/// Children are visited in ascending code-point order, making the output
/// stable across runs regardless of child-map iteration order.
///
/// # Example
///
/// ```
/// use koa_trie_lib::trie::{TreeRenderer, Trie};
///
/// let mut trie = Trie::<()>::with_name("Words");
/// trie.add("hi").unwrap();
///
/// let rendered = TreeRenderer::new().render(&trie);
/// assert_eq!(rendered, "Words\n└── h\n    └── i\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    show_descendant_counts: bool,
}

impl TreeRenderer {
    /// Creates a renderer with plain labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotates every node that has descendants with their count.
    pub fn with_descendant_counts(mut self, show: bool) -> Self {
        self.show_descendant_counts = show;
        self
    }

    /// Renders the whole trie, headed by its display name.
    pub fn render<V>(&self, trie: &Trie<V>) -> String {
        let mut out = String::new();
        out.push_str(trie.name());
        out.push('\n');
        self.render_children(trie.root(), "", &mut out);
        out
    }

    fn render_children<V>(&self, node: NodeRef<'_, V>, indent: &str, out: &mut String) {
        let children: Vec<NodeRef<'_, V>> = node.children().collect();
        let count = children.len();

        for (index, child) in children.into_iter().enumerate() {
            let last = index + 1 == count;

            out.push_str(indent);
            out.push_str(if last { "└── " } else { "├── " });
            if let Some(key) = child.key() {
                out.push(key);
            }
            if self.show_descendant_counts && child.child_count() > 0 {
                out.push_str(&format!(" ({})", child.descendant_count()));
            }
            out.push('\n');

            let child_indent = if last {
                format!("{indent}    ")
            } else {
                format!("{indent}│   ")
            };
            self.render_children(child, &child_indent, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trie() -> Trie {
        let mut trie = Trie::with_name("Sample");
        for word in ["ba", "bc", "a"] {
            trie.add(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_render_sorted_and_nested() {
        let rendered = TreeRenderer::new().render(&sample_trie());

        let expected = "\
Sample
├── a
└── b
    ├── a
    └── c
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_with_descendant_counts() {
        let rendered = TreeRenderer::new()
            .with_descendant_counts(true)
            .render(&sample_trie());

        // Leaves stay unannotated; branching nodes carry their subtree size.
        let expected = "\
Sample
├── a
└── b (2)
    ├── a
    └── c
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_trie_is_header_only() {
        let trie: Trie = Trie::with_name("Empty");
        assert_eq!(TreeRenderer::new().render(&trie), "Empty\n");
    }

    #[test]
    fn test_render_deterministic() {
        let trie = sample_trie();
        let renderer = TreeRenderer::new();
        assert_eq!(renderer.render(&trie), renderer.render(&trie));
    }
}
