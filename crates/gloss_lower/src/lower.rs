//! Value-to-document lowering.
//!
//! Converts a [`Value`] graph into the document tree the layout engine
//! consumes. Dispatch order, first match wins:
//!
//! 1. Custom prettifier registry (rewrite, then lower the replacement)
//! 2. `ToPretty` hook on custom values (lower the returned value)
//! 3. Scalars → literal text
//! 4. Symbols → bare text
//! 5. Records, fields, tuples, lists, sets, maps → document nodes
//! 6. Opaque fallback → stored representation, verbatim
//!
//! Lowering terminates on any finite input, cyclic graphs included: the
//! identities of the containers on the active path are tracked, and
//! re-entering one substitutes [`CYCLE_SENTINEL`] instead of recursing.

use std::sync::Arc;

use gloss_ir::{Doc, DocNode, FieldValue, Heap, RecordValue, Value};
use gloss_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::literals;
use crate::registry;

/// Text substituted for a value already being lowered on the active path.
pub const CYCLE_SENTINEL: &str = "<ERROR:cycle>";

/// Lower a value into a document tree.
///
/// Builds a fresh [`Lowerer`], so identity tracking never leaks between
/// top-level calls.
pub fn lower(value: &Value) -> Doc {
    Lowerer::new().lower(value)
}

/// Compiles values into document trees, tracking the container identities
/// on the active recursion path.
#[derive(Default)]
pub struct Lowerer {
    active: FxHashSet<usize>,
}

impl Lowerer {
    pub fn new() -> Self {
        Lowerer::default()
    }

    /// Lower one value. Reentrant: nested calls share this lowerer's
    /// active-path tracking.
    pub fn lower(&mut self, value: &Value) -> Doc {
        ensure_sufficient_stack(|| self.dispatch(value))
    }

    fn dispatch(&mut self, value: &Value) -> Doc {
        if let Some(replacement) = registry::rewrite(value) {
            tracing::trace!("custom prettifier rewrote value");
            return self.lower(&replacement);
        }

        match value {
            Value::None => Doc::text(literals::NONE),
            Value::Bool(b) => Doc::Text(literals::bool_text(*b)),
            Value::Int(n) => Doc::Text(literals::int_text(*n)),
            Value::Float(x) => Doc::Text(literals::float_text(*x)),
            Value::Str(s) => Doc::Text(literals::str_text(s)),
            Value::Function(name) => Doc::Text(literals::function_text(name)),
            Value::Type(name) => Doc::Text(literals::type_text(name)),
            Value::Symbol(name) => Doc::Text(name.clone()),
            Value::Opaque(repr) => Doc::Text(repr.clone()),
            Value::Field(field) => self.lower_field(field),
            Value::Record(record) => self.lower_record(record),
            Value::Custom(custom) => {
                let address = Arc::as_ptr(custom) as *const () as usize;
                self.guarded(address, |this| this.lower(&custom.to_pretty()))
            }
            Value::Tuple(cell) => self.lower_sequence(cell, "(", ")"),
            Value::List(cell) => self.lower_sequence(cell, "[", "]"),
            Value::Set(cell) => self.lower_sequence(cell, "set(", ")"),
            Value::Map(cell) => self.lower_map(cell),
        }
    }

    /// Run `f` with `address` marked active; substitute the sentinel if it
    /// already is.
    fn guarded(&mut self, address: usize, f: impl FnOnce(&mut Self) -> Doc) -> Doc {
        if !self.active.insert(address) {
            tracing::debug!(address, "cycle detected; substituting sentinel");
            return Doc::text(CYCLE_SENTINEL);
        }
        let doc = f(self);
        self.active.remove(&address);
        doc
    }

    fn lower_field(&mut self, field: &FieldValue) -> Doc {
        let head = format!("{}{}", field.name, field.separator);
        // A field merges with whatever its value lowered to: plain text
        // concatenates, a node absorbs the field name into its head.
        match self.lower(&field.value) {
            Doc::Text(text) => Doc::Text(head + &text),
            Doc::Node(inner) => Doc::Node(DocNode {
                head: head + &inner.head,
                items: inner.items,
                tail: inner.tail,
                all_or_nothing: inner.all_or_nothing,
            }),
        }
    }

    fn lower_record(&mut self, record: &RecordValue) -> Doc {
        let items: Vec<Doc> = record
            .fields
            .iter()
            .map(|field| self.lower_field(field))
            .collect();
        let all_or_nothing = record.all_or_nothing || any_all_or_nothing(&items);
        Doc::Node(DocNode {
            head: format!("{}{}", record.name, record.opener),
            items,
            tail: record.closer.clone(),
            all_or_nothing,
        })
    }

    fn lower_sequence(&mut self, cell: &Heap<Vec<Value>>, head: &str, tail: &str) -> Doc {
        self.guarded(cell.address(), |this| {
            let store = cell.read();
            let items: Vec<Doc> = store.iter().map(|item| this.lower(item)).collect();
            let all_or_nothing = any_all_or_nothing(&items);
            Doc::Node(DocNode {
                head: head.to_string(),
                items,
                tail: tail.to_string(),
                all_or_nothing,
            })
        })
    }

    // Maps always break all-or-nothing: field lists read poorly when some
    // entries share a line.
    fn lower_map(&mut self, cell: &Heap<Vec<(Value, Value)>>) -> Doc {
        self.guarded(cell.address(), |this| {
            let store = cell.read();
            let items: Vec<Doc> = store
                .iter()
                .map(|(key, value)| {
                    let name = this.key_text(key);
                    this.lower_field(&FieldValue::new(name, value.clone()))
                })
                .collect();
            Doc::Node(DocNode {
                head: "{".to_string(),
                items,
                tail: "}".to_string(),
                all_or_nothing: true,
            })
        })
    }

    /// Single-line text of a map key.
    fn key_text(&mut self, key: &Value) -> String {
        flatten(&self.lower(key))
    }
}

fn any_all_or_nothing(items: &[Doc]) -> bool {
    items
        .iter()
        .any(|item| matches!(item, Doc::Node(node) if node.all_or_nothing))
}

/// Collapse a document to its single-line text.
fn flatten(doc: &Doc) -> String {
    ensure_sufficient_stack(|| match doc {
        Doc::Text(text) => text.clone(),
        Doc::Node(node) => {
            let mut out = node.head.clone();
            for (i, item) in node.items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&flatten(item));
            }
            out.push_str(&node.tail);
            out
        }
    })
}
