//! Printable runtime values.
//!
//! `Value` is the closed set of inputs the pretty-printer understands.
//! Scalars are stored inline; containers live behind shared [`Heap`] cells
//! so value graphs can alias and contain themselves. Construction goes
//! through the factory methods, which is also the only way heap cells are
//! created.

use std::fmt;
use std::sync::Arc;

use crate::heap::Heap;
use crate::traits::ToPretty;

/// Separator between a field's name and its value, unless overridden.
pub const DEFAULT_FIELD_SEPARATOR: &str = ": ";

const DEFAULT_RECORD_OPENER: &str = "(";
const DEFAULT_RECORD_CLOSER: &str = ")";

/// One named attribute of a record: `name`, `value`, and the separator
/// printed between them.
#[derive(Clone, Debug)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
    pub separator: String,
}

impl FieldValue {
    /// Build a field with the default `": "` separator.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        FieldValue {
            name: name.into(),
            value,
            separator: DEFAULT_FIELD_SEPARATOR.to_string(),
        }
    }

    /// Override the separator printed between name and value.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// A named composite: `name`, ordered fields, and a delimiter pair.
#[derive(Clone, Debug)]
pub struct RecordValue {
    pub name: String,
    pub fields: Vec<FieldValue>,
    pub opener: String,
    pub closer: String,
    /// Request uniform line-breaking of the fields when the record breaks.
    pub all_or_nothing: bool,
}

impl RecordValue {
    /// Build a record with the default `(` / `)` delimiters.
    pub fn new(name: impl Into<String>, fields: Vec<FieldValue>) -> Self {
        RecordValue {
            name: name.into(),
            fields,
            opener: DEFAULT_RECORD_OPENER.to_string(),
            closer: DEFAULT_RECORD_CLOSER.to_string(),
            all_or_nothing: false,
        }
    }

    /// Override the delimiter pair, e.g. `{` / `}`.
    #[must_use]
    pub fn with_delimiters(mut self, opener: impl Into<String>, closer: impl Into<String>) -> Self {
        self.opener = opener.into();
        self.closer = closer.into();
        self
    }

    /// Request uniform line-breaking of the fields.
    #[must_use]
    pub fn with_all_or_nothing(mut self, all_or_nothing: bool) -> Self {
        self.all_or_nothing = all_or_nothing;
        self
    }
}

/// A printable runtime value.
#[derive(Clone)]
pub enum Value {
    // Scalars (inline, never cycle-tracked)
    /// The absent value, rendered `none`.
    None,
    /// Boolean, rendered `true` / `false`.
    Bool(bool),
    /// Integer, rendered in decimal.
    Int(i64),
    /// Floating point, rendered in literal form (`1.0`, not `1`).
    Float(f64),
    /// String, rendered quoted and escaped.
    Str(String),
    /// Function-like value, rendered `<function NAME>`.
    Function(String),
    /// Type-like value, rendered `<type NAME>`.
    Type(String),

    /// Bare token, rendered verbatim without quotes.
    Symbol(String),
    /// One named attribute; meaningful on its own or inside a record.
    Field(Box<FieldValue>),
    /// Named composite with delimited fields.
    Record(Box<RecordValue>),

    // Containers (shared heap cells; may participate in cycles)
    /// Fixed-arity ordered sequence, rendered `( … )`.
    Tuple(Heap<Vec<Value>>),
    /// Variable-length ordered sequence, rendered `[ … ]`.
    List(Heap<Vec<Value>>),
    /// Unordered collection, rendered `set( … )` in backing-store order.
    /// Uniqueness is the caller's concern.
    Set(Heap<Vec<Value>>),
    /// Key/value mapping, rendered `{ … }` in backing-store order.
    Map(Heap<Vec<(Value, Value)>>),

    /// A value that carries its own pretty representation.
    Custom(Arc<dyn ToPretty>),
    /// Fallback for kinds the printer has no structure for: a
    /// caller-supplied representation, rendered verbatim.
    Opaque(String),
}

impl Value {
    /// Build an integer value.
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Build a floating-point value.
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    /// Build a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Build a bare-token value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Build a function-like value.
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(name.into())
    }

    /// Build a type-like value.
    pub fn type_of(name: impl Into<String>) -> Self {
        Value::Type(name.into())
    }

    /// Build a standalone field value.
    pub fn field(name: impl Into<String>, value: Value) -> Self {
        Value::Field(Box::new(FieldValue::new(name, value)))
    }

    /// Build a record value with default delimiters.
    pub fn record(name: impl Into<String>, fields: Vec<FieldValue>) -> Self {
        Value::Record(Box::new(RecordValue::new(name, fields)))
    }

    /// Build a tuple value.
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Build a list value.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Build a set value. Entries render in the order given.
    pub fn set(items: Vec<Value>) -> Self {
        Value::Set(Heap::new(items))
    }

    /// Build a map value. Entries render in the order given.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Wrap a value that carries its own pretty representation.
    pub fn custom(value: impl ToPretty + 'static) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Build a fallback value from a preformatted representation.
    pub fn opaque(repr: impl Into<String>) -> Self {
        Value::Opaque(repr.into())
    }
}

// Shallow by hand: heap cells print as addresses, so debugging a cyclic
// value terminates.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Function(name) => write!(f, "Function({name:?})"),
            Value::Type(name) => write!(f, "Type({name:?})"),
            Value::Symbol(name) => write!(f, "Symbol({name:?})"),
            Value::Field(field) => write!(f, "Field({:?}, ..)", field.name),
            Value::Record(record) => write!(f, "Record({:?}, ..)", record.name),
            Value::Tuple(cell) => write!(f, "Tuple({cell:?})"),
            Value::List(cell) => write!(f, "List({cell:?})"),
            Value::Set(cell) => write!(f, "Set({cell:?})"),
            Value::Map(cell) => write!(f, "Map({cell:?})"),
            Value::Custom(_) => write!(f, "Custom(..)"),
            Value::Opaque(repr) => write!(f, "Opaque({repr:?})"),
        }
    }
}
