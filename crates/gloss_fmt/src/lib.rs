//! Gloss Formatter
//!
//! Width-bounded pretty-printing of structured runtime values.
//!
//! # Architecture
//!
//! Rendering is a two-stage pipeline:
//!
//! 1. **Lowering** (`gloss_lower`): the value graph becomes a document
//!    tree describing what can be grouped, broken, or kept together.
//! 2. **Layout** (this crate): the document tree is walked top-down,
//!    deciding node by node whether to print inline or break onto a new
//!    indented line, within a configurable width budget.
//!
//! Core principle: render inline if it fits, break otherwise. Only a
//! single atomic token wider than the whole budget can overflow a line.
//!
//! # Modules
//!
//! - [`emitter`]: line accumulation
//! - [`context`]: configuration and column tracking
//! - [`width`]: single-line width accounting
//! - [`layout`]: break/inline decisions
//!
//! # Example
//!
//! ```
//! use gloss_fmt::{render_with_config, LayoutConfig, Value};
//!
//! let value = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
//! let lines = render_with_config(&value, &LayoutConfig::with_max_width(78));
//! assert_eq!(lines, vec!["[1, 2, 3]"]);
//! ```

pub mod context;
pub mod emitter;
pub mod layout;
pub mod width;

pub use context::{LayoutConfig, LayoutContext, DEFAULT_INDENT_UNIT, DEFAULT_MAX_WIDTH};
pub use emitter::{Emitter, LineEmitter};
pub use layout::{layout, layout_single_line};

// The full construction surface, re-exported so most callers depend on
// this crate alone.
pub use gloss_ir::{
    Doc, DocNode, FieldValue, Heap, RecordValue, ToPretty, Value, DEFAULT_FIELD_SEPARATOR,
};
pub use gloss_lower::{lower, register_prettifier, Lowerer, CYCLE_SENTINEL};

/// Render a value into width-bounded lines with the default config
/// (width 78, four-space indent).
pub fn render(value: &Value) -> Vec<String> {
    render_with_config(value, &LayoutConfig::default())
}

/// Render a value into width-bounded lines.
pub fn render_with_config(value: &Value, config: &LayoutConfig) -> Vec<String> {
    let doc = lower(value);
    let lines = layout(&doc, config);
    tracing::debug!(
        lines = lines.len(),
        max_width = config.max_width,
        "render complete"
    );
    lines
}

/// Render a value and write each line to stdout.
pub fn display(value: &Value) {
    display_with_config(value, &LayoutConfig::default());
}

/// Render a value with the given config and write each line to stdout.
pub fn display_with_config(value: &Value, config: &LayoutConfig) {
    for line in render_with_config(value, config) {
        println!("{line}");
    }
}

/// Render a value on a single line, ignoring any width budget.
pub fn to_single_line(value: &Value) -> String {
    layout_single_line(&lower(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_uses_the_default_width() {
        let value = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(render(&value), vec!["[1, 2, 3]"]);
    }

    #[test]
    fn to_single_line_ignores_structure_size() {
        let value = Value::map(vec![
            (Value::str("a"), Value::int(1)),
            (
                Value::str("b"),
                Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]),
            ),
        ]);
        assert_eq!(to_single_line(&value), "{\"a\": 1, \"b\": [1, 2, 3]}");
    }
}
