//! Gloss Lowering - Values to Document Trees
//!
//! The first stage of the pretty-printing pipeline: convert an arbitrary
//! [`Value`](gloss_ir::Value) graph into the document tree the layout
//! engine consumes.
//!
//! # Pipeline Position
//!
//! ```text
//! Value → **lower** → Doc → layout → lines
//! ```
//!
//! # Guarantees
//!
//! - Terminates on any finite input, including self-referential graphs:
//!   containers already on the active lowering path are replaced by the
//!   [`CYCLE_SENTINEL`] text.
//! - Never fails for well-formed input; there is no error channel.
//!
//! # Extension Points
//!
//! - [`register_prettifier`]: process-wide `(predicate, transform)` pairs
//!   consulted before built-in dispatch, in registration order.
//! - [`ToPretty`](gloss_ir::ToPretty): values that carry their own pretty
//!   representation.

mod literals;
mod lower;
mod registry;

pub use lower::{lower, Lowerer, CYCLE_SENTINEL};
pub use registry::{register_prettifier, Predicate, Transform};
