//! Diagnostic text dumps of a heap's tree
//!
//! Two formats are available, both keyed on `K: Display`:
//!
//! - **Preorder**: keys in preorder (node, left, right), each followed by a
//!   space, terminated by a newline.
//! - **Sideways 2D**: the tree rotated a quarter turn counter-clockwise. The
//!   right subtree is printed above its parent and the left subtree below it;
//!   every level is indented by [`RenderConfig::indent_width`] more spaces.
//!
//! ```text
//!                     7
//!
//!           3
//!
//!                     6
//!
//! 1
//!
//!                     5
//!
//!           2
//!
//!                     4
//! ```

use crate::linked::{LinkedMinHeap, NodeRef};
use std::fmt;

/// Per-level indent used by the sideways rendering unless configured otherwise
pub const DEFAULT_INDENT_WIDTH: usize = 10;

/// Settings for diagnostic rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces added per tree level in the sideways rendering
    pub indent_width: usize,
}

impl RenderConfig {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

/// [`Display`](fmt::Display) adapter for the preorder key dump
pub struct PreorderKeys<'a, K, V> {
    heap: &'a LinkedMinHeap<K, V>,
}

impl<K: fmt::Display, V> fmt::Display for PreorderKeys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, _) in self.heap.preorder() {
            write!(f, "{} ", key)?;
        }
        writeln!(f)
    }
}

/// [`Display`](fmt::Display) adapter for the sideways tree rendering
pub struct Sideways<'a, K, V> {
    heap: &'a LinkedMinHeap<K, V>,
}

impl<K: fmt::Display, V> fmt::Display for Sideways<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.heap.render_config().indent_width;
        write_sideways(f, self.heap.root_ref(), 0, indent)
    }
}

// Recursion depth is the tree height, which is logarithmic in the length.
fn write_sideways<K: fmt::Display, V>(
    f: &mut fmt::Formatter<'_>,
    node: Option<NodeRef<'_, K, V>>,
    depth: usize,
    indent: usize,
) -> fmt::Result {
    let Some(node) = node else {
        return Ok(());
    };

    write_sideways(f, node.right(), depth + 1, indent)?;
    writeln!(f)?;
    writeln!(f, "{:width$}{}", "", node.key(), width = depth * indent)?;
    write_sideways(f, node.left(), depth + 1, indent)
}

impl<K: fmt::Display, V> LinkedMinHeap<K, V> {
    /// Keys in preorder, space separated, ending in a newline
    ///
    /// ```rust
    /// use linked_min_heap::LinkedMinHeap;
    ///
    /// let heap: LinkedMinHeap<_, _> = [(3, ()), (1, ()), (2, ())].into_iter().collect();
    /// assert_eq!(heap.display_preorder().to_string(), "1 3 2 \n");
    /// ```
    pub fn display_preorder(&self) -> PreorderKeys<'_, K, V> {
        PreorderKeys { heap: self }
    }

    /// Sideways rendering of the tree, indented per [`RenderConfig`]
    pub fn display_2d(&self) -> Sideways<'_, K, V> {
        Sideways { heap: self }
    }

    /// Writes the preorder key dump into `out`
    pub fn write_preorder<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.display_preorder())
    }

    /// Renders the sideways tree into a `String`
    pub fn render_2d(&self) -> String {
        self.display_2d().to_string()
    }

    /// Prints the preorder key dump to stdout
    pub fn print(&self) {
        print!("{}", self.display_preorder());
    }

    /// Prints the sideways tree to stdout
    pub fn print_2d(&self) {
        print!("{}", self.display_2d());
    }
}
