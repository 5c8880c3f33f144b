//! Process-wide custom prettifier registry.
//!
//! Host applications teach the compiler about new value shapes by
//! registering `(predicate, transform)` pairs. The registry is scanned in
//! registration order before any built-in dispatch runs; the first
//! accepting predicate rewrites the value, and the rewritten value is
//! lowered in its place.
//!
//! Registration is append-only for the lifetime of the process. The list
//! is guarded by a lock so concurrent registration is safe, though typical
//! use registers everything during single-threaded startup.

use gloss_ir::Value;
use parking_lot::RwLock;

/// Predicate deciding whether a prettifier applies to a value.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Rewrite applied when the predicate accepts.
pub type Transform = dyn Fn(&Value) -> Value + Send + Sync;

struct Prettifier {
    applies: Box<Predicate>,
    rewrite: Box<Transform>,
}

static PRETTIFIERS: RwLock<Vec<Prettifier>> = RwLock::new(Vec::new());

/// Append a custom prettifier to the process-wide registry.
///
/// Earlier registrations win when several predicates accept the same
/// value. There is no removal.
///
/// The rewritten value is lowered from scratch, registry included: a
/// transform whose output still satisfies its own predicate will rewrite
/// forever, so transforms must produce a value they no longer claim.
pub fn register_prettifier(
    applies: impl Fn(&Value) -> bool + Send + Sync + 'static,
    rewrite: impl Fn(&Value) -> Value + Send + Sync + 'static,
) {
    let mut registry = PRETTIFIERS.write();
    registry.push(Prettifier {
        applies: Box::new(applies),
        rewrite: Box::new(rewrite),
    });
    tracing::debug!(total = registry.len(), "registered custom prettifier");
}

/// Rewrite `value` through the first accepting prettifier, if any.
pub(crate) fn rewrite(value: &Value) -> Option<Value> {
    let registry = PRETTIFIERS.read();
    registry
        .iter()
        .find(|prettifier| (prettifier.applies)(value))
        .map(|prettifier| (prettifier.rewrite)(value))
}
