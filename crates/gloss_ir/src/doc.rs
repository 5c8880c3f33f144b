//! The compiled document tree.
//!
//! Every value compiles to either a plain piece of text or a [`DocNode`]:
//! a head/tail decoration around an ordered list of children. The layout
//! engine is the only consumer; it never mutates a document once built.

/// A compiled document: plain text, or a decorated group of children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Doc {
    /// Atomic text, emitted verbatim. Never triggers a break decision by
    /// itself.
    Text(String),
    /// A breakable group.
    Node(DocNode),
}

impl Doc {
    /// Build a `Doc::Text` from anything string-like.
    pub fn text(text: impl Into<String>) -> Self {
        Doc::Text(text.into())
    }
}

/// A breakable group: `head` before the children, `tail` after.
///
/// `items` preserves exactly the iteration order the compiler observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocNode {
    /// Prefix printed before the children, e.g. `"Point("`, `"["`, `"{"`.
    pub head: String,
    /// Ordered children.
    pub items: Vec<Doc>,
    /// Suffix printed after the children, e.g. `")"`, `"]"`, `"}"`.
    pub tail: String,
    /// When this node breaks, every child gets its own line; partial
    /// same-line grouping is forbidden.
    pub all_or_nothing: bool,
}

impl DocNode {
    /// Build a node with `all_or_nothing` off.
    pub fn new(head: impl Into<String>, items: Vec<Doc>, tail: impl Into<String>) -> Self {
        DocNode {
            head: head.into(),
            items,
            tail: tail.into(),
            all_or_nothing: false,
        }
    }
}
