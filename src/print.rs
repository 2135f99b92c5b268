use std::fmt;

use crate::tree::{Subtree, Tree};

/// Depth-indented pre-order rendering of a tree, one `key  (height)` line per key.
pub struct Dump<'a, K>(&'a Tree<K>);

impl<K> Tree<K> {
    /// Returns a displayable dump of the tree's keys and per-node heights.
    ///
    /// ```
    /// let tree: avl_index::Tree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.dump().to_string(), "2  (2)\n  1  (1)\n  3  (1)\n");
    /// ```
    pub fn dump(&self) -> Dump<'_, K> {
        Dump(self)
    }

    /// Writes the dump to standard output.
    pub fn print(&self)
    where
        K: fmt::Display,
    {
        print!("{}", self.dump());
    }
}

impl<K: fmt::Display> fmt::Display for Dump<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_prefixed(f, &self.0.root, 0)
    }
}

fn write_prefixed<K: fmt::Display>(
    f: &mut fmt::Formatter,
    subtree: &Subtree<K>,
    depth: usize,
) -> fmt::Result {
    let Subtree::Node(node) = subtree else {
        return Ok(());
    };
    writeln!(f, "{:indent$}{}  ({})", "", node.key, node.height, indent = 2 * depth)?;
    write_prefixed(f, &node.left, depth + 1)?;
    write_prefixed(f, &node.right, depth + 1)
}
