//! Branch-art rendering of trees, for debugging by eyeball.

use std::fmt;

use crate::tree::{Node, Tree};

/// Renders the tree as indented branch art, one line per node with the
/// right subtree on top.
///
/// # Examples
///
/// ```
/// use treekit::display::branch_lines;
/// use treekit::tree::Tree;
///
/// let tree = Tree::from_values(vec![1, 2, 3]);
///
/// assert_eq!(branch_lines(&tree), ["│   ┌── 3", "└── 2", "    └── 1"]);
/// ```
pub fn branch_lines<T: fmt::Display>(tree: &Tree<T>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(root) = tree.root() {
        render(root, "", true, &mut lines);
    }
    lines
}

fn render<T: fmt::Display>(node: &Node<T>, prefix: &str, is_left: bool, lines: &mut Vec<String>) {
    if let Some(right) = node.right() {
        let extended = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render(right, &extended, false, lines);
    }
    let connector = if is_left { "└── " } else { "┌── " };
    lines.push(format!("{}{}{}", prefix, connector, node.value()));
    if let Some(left) = node.left() {
        let extended = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render(left, &extended, true, lines);
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in branch_lines(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
