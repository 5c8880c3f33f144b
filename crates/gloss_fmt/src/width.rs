//! Width Accounting
//!
//! Pure functions computing how wide a document would be if rendered on a
//! single line. The layout engine compares these against the remaining
//! budget to decide inline vs broken.
//!
//! # Width Formulas
//!
//! | Document | Width Formula |
//! |----------|---------------|
//! | Text | `text.len()` |
//! | Node | `head.len() + body + tail.len()` |
//! | Body | sum of child widths, plus 2 per `", "` between siblings |

use gloss_ir::{Doc, DocNode};
use gloss_stack::ensure_sufficient_stack;

/// Width of the `", "` separator between inline siblings.
pub const SEPARATOR_WIDTH: usize = 2;

/// Single-line width of a document.
pub fn total_width(doc: &Doc) -> usize {
    match doc {
        Doc::Text(text) => text.len(),
        Doc::Node(node) => {
            ensure_sufficient_stack(|| node.head.len() + body_width(node) + node.tail.len())
        }
    }
}

/// Single-line width of a node's children, separators included.
pub fn body_width(node: &DocNode) -> usize {
    let mut width = 0;
    for (i, item) in node.items.iter().enumerate() {
        if i > 0 {
            width += SEPARATOR_WIDTH;
        }
        width += total_width(item);
    }
    width
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(s: &str) -> Doc {
        Doc::text(s)
    }

    #[test]
    fn text_width_is_its_length() {
        assert_eq!(total_width(&text("hello")), 5);
        assert_eq!(total_width(&text("")), 0);
    }

    #[test]
    fn node_width_counts_head_tail_and_separators() {
        // [1, 2, 3] -> 2 delimiters + 3 digits + 2 separators of 2
        let node = Doc::Node(DocNode::new(
            "[",
            vec![text("1"), text("2"), text("3")],
            "]",
        ));
        assert_eq!(total_width(&node), 9);
    }

    #[test]
    fn empty_node_width_is_head_plus_tail() {
        let node = Doc::Node(DocNode::new("set(", vec![], ")"));
        assert_eq!(total_width(&node), 5);
    }

    #[test]
    fn nested_nodes_accumulate() {
        // (ab, [1, 2]) -> "(ab, [1, 2])"
        let inner = Doc::Node(DocNode::new("[", vec![text("1"), text("2")], "]"));
        let outer = Doc::Node(DocNode::new("(", vec![text("ab"), inner], ")"));
        assert_eq!(total_width(&outer), 12);
    }
}
