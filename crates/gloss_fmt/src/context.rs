//! Layout configuration and emission context.
//!
//! `LayoutContext` wraps an emitter and tracks the current column, which is
//! all the state the break/inline decisions in [`layout`](crate::layout)
//! need: a node compares its width against what remains of the budget at
//! the current column.

use crate::emitter::{Emitter, LineEmitter};

/// Default maximum line width before breaking.
pub const DEFAULT_MAX_WIDTH: usize = 78;

/// Default indentation unit (four spaces).
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Configuration for the layout engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Maximum line width before breaking to multiple lines.
    pub max_width: usize,

    /// Text emitted once per nesting level at the start of each line.
    pub indent_unit: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            max_width: DEFAULT_MAX_WIDTH,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create a config with the specified max width.
    pub fn with_max_width(max_width: usize) -> Self {
        LayoutConfig {
            max_width,
            ..Default::default()
        }
    }
}

/// Emission context: an emitter plus column tracking.
pub struct LayoutContext<E: Emitter = LineEmitter> {
    emitter: E,
    column: usize,
    config: LayoutConfig,
}

impl LayoutContext<LineEmitter> {
    /// Create a context writing into a fresh line accumulator.
    pub fn new(config: LayoutConfig) -> Self {
        LayoutContext::with_emitter(LineEmitter::new(), config)
    }

    /// Flush the current line and return the completed lines.
    pub fn finish(mut self) -> Vec<String> {
        self.emitter.emit_newline();
        self.emitter.into_lines()
    }
}

impl<E: Emitter> LayoutContext<E> {
    /// Create a context writing into a specific emitter.
    pub fn with_emitter(emitter: E, config: LayoutConfig) -> Self {
        LayoutContext {
            emitter,
            column: 0,
            config,
        }
    }

    /// The maximum line width.
    pub fn max_width(&self) -> usize {
        self.config.max_width
    }

    /// Characters already emitted on the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The column where content at `level` naturally starts: anything
    /// beyond it means the line is already occupied.
    pub fn position_for_level(&self, level: usize) -> usize {
        level * self.config.indent_unit.len()
    }

    /// Emit a text fragment and advance the column.
    pub fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
        self.column += text.len();
    }

    /// Complete the current line and indent the next one to `level`.
    pub fn new_line(&mut self, level: usize) {
        self.emitter.emit_newline();
        self.column = 0;
        for _ in 0..level {
            self.emitter.emit(&self.config.indent_unit);
            self.column += self.config.indent_unit.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn emit_advances_the_column() {
        let mut ctx = LayoutContext::new(LayoutConfig::default());
        ctx.emit("hello");
        assert_eq!(ctx.column(), 5);
        ctx.emit(", world");
        assert_eq!(ctx.column(), 12);
    }

    #[test]
    fn new_line_indents_to_the_level() {
        let mut ctx = LayoutContext::new(LayoutConfig::default());
        ctx.emit("head");
        ctx.new_line(2);
        assert_eq!(ctx.column(), 8);
        ctx.emit("x");
        assert_eq!(ctx.finish(), vec!["head", "        x"]);
    }

    #[test]
    fn position_for_level_scales_with_the_indent_unit() {
        let ctx = LayoutContext::new(LayoutConfig {
            max_width: 40,
            indent_unit: "  ".to_string(),
        });
        assert_eq!(ctx.position_for_level(0), 0);
        assert_eq!(ctx.position_for_level(3), 6);
    }

    #[test]
    fn finish_flushes_the_trailing_line() {
        let mut ctx = LayoutContext::new(LayoutConfig::default());
        ctx.emit("only");
        assert_eq!(ctx.finish(), vec!["only"]);
    }
}
