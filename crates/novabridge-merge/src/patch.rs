//! Document-level additive patch.

use novabridge_types::Document;
use tracing::debug;

use crate::value::merge_value;

/// The result of applying an addition set to a document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchOutcome {
    /// The patched document. Keys outside the addition set are carried over untouched.
    pub document: Document,
    /// Whether any key gained content.
    pub changed: bool,
    /// Addition-set keys that were absent from the target, in addition-set order.
    pub added_keys: Vec<String>,
}

/// Apply `additions` to a copy of `target`.
///
/// Iterates the addition set, not the target: every addition key is merged
/// with [`merge_value`] and the target is never mutated.
pub fn apply_additive_patch(target: &Document, additions: &Document) -> PatchOutcome {
    let mut document = target.clone();
    let mut added_keys = Vec::new();
    let mut changed = false;

    for (key, incoming) in additions {
        let existing = document.get(key);
        if existing.is_none() {
            added_keys.push(key.clone());
        }

        let outcome = merge_value(existing, Some(incoming));
        if outcome.changed {
            debug!(key = %key, kind = incoming.kind(), "additive patch changed key");
            changed = true;
        }
        if let Some(merged) = outcome.merged {
            document.insert(key.clone(), merged);
        }
    }

    PatchOutcome {
        document,
        changed,
        added_keys,
    }
}
