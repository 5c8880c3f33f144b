//! Output Emitter
//!
//! Abstraction for output production during layout. The engine writes text
//! fragments and newlines; the emitter accumulates them into completed
//! lines.

use std::mem;

/// Trait for emitting rendered output.
pub trait Emitter {
    /// Emit a text fragment onto the current line.
    fn emit(&mut self, text: &str);

    /// Complete the current line and start a new one.
    fn emit_newline(&mut self);
}

/// Line accumulator: collects emitted text into an ordered sequence of
/// completed lines.
///
/// The current line is only moved into the output when a newline is
/// emitted; callers flush the final line before taking the output.
#[derive(Default)]
pub struct LineEmitter {
    lines: Vec<String>,
    current: String,
}

impl LineEmitter {
    /// Create a new, empty line accumulator.
    pub fn new() -> Self {
        LineEmitter::default()
    }

    /// Take the completed lines. Does not flush the current line.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Emitter for LineEmitter {
    fn emit(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.lines.push(mem::take(&mut self.current));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accumulates_completed_lines() {
        let mut emitter = LineEmitter::new();
        emitter.emit("first");
        emitter.emit_newline();
        emitter.emit("sec");
        emitter.emit("ond");
        emitter.emit_newline();
        assert_eq!(emitter.into_lines(), vec!["first", "second"]);
    }

    #[test]
    fn unflushed_text_is_not_a_line() {
        let mut emitter = LineEmitter::new();
        emitter.emit("pending");
        assert_eq!(emitter.into_lines(), Vec::<String>::new());
    }
}
