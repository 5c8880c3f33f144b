//! Layout Engine
//!
//! Top-down rendering that decides, node by node, whether to print inline
//! or break onto indented lines.
//!
//! # Algorithm
//!
//! At each node, with `position` the current column and `level` the
//! nesting depth:
//!
//! 1. If something already occupies this line past the indent floor, the
//!    node is a continuing sibling: pack it after `", "` if the previous
//!    sibling stayed inline and the node fits the remaining budget,
//!    otherwise emit `","` and restart it on a fresh indented line.
//! 2. Plain text is atomic: emitted verbatim.
//! 3. A node that fits the remaining budget renders in forced single-line
//!    mode, with no further decisions below it.
//! 4. Otherwise the node breaks: head, children on indented lines, tail on
//!    its own line. An `all_or_nothing` node puts every child on its own
//!    line; any other node lets children pack until one breaks, after
//!    which every later sibling starts its own line (the break cascades
//!    forward).

use gloss_ir::Doc;
use gloss_stack::ensure_sufficient_stack;

use crate::context::{LayoutConfig, LayoutContext};
use crate::emitter::Emitter;
use crate::width::{total_width, SEPARATOR_WIDTH};

/// Render a document into width-bounded lines.
pub fn layout(doc: &Doc, config: &LayoutConfig) -> Vec<String> {
    let mut ctx = LayoutContext::new(config.clone());
    render(doc, &mut ctx, 0, false);
    ctx.finish()
}

/// Render a document on a single line, ignoring the width budget.
///
/// The forced single-line renderer never emits a newline, so exactly one
/// line results; anything else is an engine bug and aborts loudly.
pub fn layout_single_line(doc: &Doc) -> String {
    let mut ctx = LayoutContext::new(LayoutConfig::default());
    render_single_line(doc, &mut ctx);
    let lines = ctx.finish();
    assert_eq!(
        lines.len(),
        1,
        "forced single-line rendering produced multiple lines"
    );
    lines.into_iter().next().unwrap_or_default()
}

/// Render one document. Returns whether it broke across lines, which
/// feeds the following sibling's layout decision.
pub(crate) fn render<E: Emitter>(
    doc: &Doc,
    ctx: &mut LayoutContext<E>,
    level: usize,
    after_broken_sibling: bool,
) -> bool {
    ensure_sufficient_stack(|| render_inner(doc, ctx, level, after_broken_sibling))
}

fn render_inner<E: Emitter>(
    doc: &Doc,
    ctx: &mut LayoutContext<E>,
    level: usize,
    after_broken_sibling: bool,
) -> bool {
    let width = total_width(doc);
    let position = ctx.column();

    if position > ctx.position_for_level(level) {
        // Continuing a sibling line. Pack after ", " when allowed and it
        // fits; otherwise restart this node on a fresh line.
        return if after_broken_sibling || width + SEPARATOR_WIDTH + position > ctx.max_width() {
            ctx.emit(",");
            ctx.new_line(level);
            render(doc, ctx, level, false)
        } else {
            ctx.emit(", ");
            render_single_line(doc, ctx);
            false
        };
    }

    match doc {
        Doc::Text(text) => {
            ctx.emit(text);
            false
        }
        Doc::Node(node) => {
            if width + position <= ctx.max_width() {
                render_single_line(doc, ctx);
                return false;
            }

            ctx.emit(&node.head);
            if !node.items.is_empty() {
                ctx.new_line(level + 1);
                if node.all_or_nothing {
                    // Uniform breaking: one child per line, whether or not
                    // it would have fit beside a sibling.
                    for (i, item) in node.items.iter().enumerate() {
                        if i > 0 {
                            ctx.emit(",");
                            ctx.new_line(level + 1);
                        }
                        render(item, ctx, level + 1, false);
                    }
                } else {
                    let mut any_child_broke = false;
                    for item in &node.items {
                        let broke = render(item, ctx, level + 1, any_child_broke);
                        any_child_broke = any_child_broke || broke;
                    }
                }
            }
            ctx.new_line(level);
            ctx.emit(&node.tail);
            true
        }
    }
}

/// Forced single-line rendering: head, children joined by `", "`, tail.
/// Never consults width or level; used once an ancestor has committed this
/// subtree to the current line.
pub(crate) fn render_single_line<E: Emitter>(doc: &Doc, ctx: &mut LayoutContext<E>) {
    ensure_sufficient_stack(|| match doc {
        Doc::Text(text) => ctx.emit(text),
        Doc::Node(node) => {
            ctx.emit(&node.head);
            for (i, item) in node.items.iter().enumerate() {
                if i > 0 {
                    ctx.emit(", ");
                }
                render_single_line(item, ctx);
            }
            ctx.emit(&node.tail);
        }
    });
}

#[cfg(test)]
mod tests {
    use gloss_ir::DocNode;
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(s: &str) -> Doc {
        Doc::text(s)
    }

    fn list_node(items: Vec<Doc>) -> Doc {
        Doc::Node(DocNode::new("[", items, "]"))
    }

    #[test]
    fn fitting_nodes_stay_on_one_line() {
        let doc = list_node(vec![text("1"), text("2"), text("3")]);
        let lines = layout(&doc, &LayoutConfig::default());
        assert_eq!(lines, vec!["[1, 2, 3]"]);
    }

    #[test]
    fn overflowing_nodes_break_with_indent() {
        let doc = list_node(vec![text("aaaa"), text("bbbb"), text("cccc")]);
        let lines = layout(&doc, &LayoutConfig::with_max_width(10));
        assert_eq!(lines, vec!["[", "    aaaa,", "    bbbb,", "    cccc", "]"]);
    }

    #[test]
    fn siblings_pack_until_the_budget_runs_out() {
        let doc = list_node(vec![text("11"), text("22"), text("33"), text("44")]);
        let lines = layout(&doc, &LayoutConfig::with_max_width(12));
        assert_eq!(lines, vec!["[", "    11, 22,", "    33, 44", "]"]);
    }

    #[test]
    fn all_or_nothing_forbids_packing() {
        let node = Doc::Node(DocNode {
            head: "[".to_string(),
            items: vec![text("11"), text("22"), text("33")],
            tail: "]".to_string(),
            all_or_nothing: true,
        });
        let lines = layout(&node, &LayoutConfig::with_max_width(10));
        assert_eq!(lines, vec!["[", "    11,", "    22,", "    33", "]"]);
    }

    #[test]
    fn oversized_text_is_emitted_verbatim() {
        let doc = text("a-single-token-wider-than-the-budget");
        let lines = layout(&doc, &LayoutConfig::with_max_width(10));
        assert_eq!(lines, vec!["a-single-token-wider-than-the-budget"]);
    }

    #[test]
    fn single_line_rendering_never_breaks() {
        let doc = list_node(vec![text("aaaa"), list_node(vec![text("bbbb")])]);
        assert_eq!(layout_single_line(&doc), "[aaaa, [bbbb]]");
    }

    #[test]
    fn empty_node_breaks_to_bare_delimiters() {
        // Head wider than the budget forces a break even with no items.
        let node = Doc::Node(DocNode::new("ALongRecordName(", vec![], ")"));
        let lines = layout(&node, &LayoutConfig::with_max_width(10));
        assert_eq!(lines, vec!["ALongRecordName(", ")"]);
    }
}
