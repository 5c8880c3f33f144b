//! Gloss IR - Value and Document Model
//!
//! This crate contains the core data structures for the gloss pretty-printer:
//! - [`Value`]: the closed set of printable runtime values
//! - [`Heap`]: shared, mutable container cells with a stable address identity
//! - [`Doc`] / [`DocNode`]: the compiled document tree consumed by the layout
//!   engine
//! - [`ToPretty`]: the capability trait for values that carry their own
//!   pretty representation
//!
//! # Design Philosophy
//!
//! - **Closed value set**: printing dispatches over a tagged enum, one case
//!   per value kind, so the compiler gets exhaustiveness checking instead of
//!   runtime type probing.
//! - **Identity where it matters**: containers live behind [`Heap`] cells so
//!   value graphs can share and even contain themselves; the cell address is
//!   the identity used to cut cycles.
//! - **Passive documents**: the document tree is structure only. Width
//!   accounting and breaking decisions belong to the layout engine.

mod doc;
mod heap;
mod traits;
mod value;

pub use doc::{Doc, DocNode};
pub use heap::Heap;
pub use traits::ToPretty;
pub use value::{FieldValue, RecordValue, Value, DEFAULT_FIELD_SEPARATOR};
