//! Value-level merge: combine one existing value with one incoming value.
//!
//! Dispatch is on the incoming value's shape. Sequences merge as a set union
//! over element string forms, mappings gain missing keys one level deep, and
//! scalars only fill a missing or empty-string slot.

use std::collections::btree_map::Entry;
use std::collections::HashSet;

use novabridge_types::{Document, Value};

/// The result of merging one value.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    /// The merged value, `None` only when both inputs were absent.
    pub merged: Option<Value>,
    /// Whether `merged` gained anything relative to the existing value.
    ///
    /// When an existing value was present, `false` means `merged` is that
    /// value unchanged.
    pub changed: bool,
}

impl MergeOutcome {
    fn kept(existing: Option<&Value>) -> Self {
        Self {
            merged: existing.cloned(),
            changed: false,
        }
    }

    /// `built` if it gained anything, else the existing value untouched.
    fn settle(existing: Option<&Value>, built: Value, changed: bool) -> Self {
        match existing {
            Some(_) if !changed => Self::kept(existing),
            _ => Self {
                merged: Some(built),
                changed,
            },
        }
    }
}

/// Merge `incoming` into `existing` without overwriting existing data.
///
/// An incoming sequence or mapping only builds on an existing value of the
/// same shape. An existing value of any other shape is replaced by the
/// result, provided the result gained at least one element.
pub fn merge_value(existing: Option<&Value>, incoming: Option<&Value>) -> MergeOutcome {
    let Some(incoming) = incoming else {
        return MergeOutcome::kept(existing);
    };

    match incoming {
        Value::Sequence(items) => merge_sequence(existing, items),
        Value::Mapping(entries) => merge_mapping(existing, entries),
        Value::Scalar(_) => merge_scalar(existing, incoming),
    }
}

fn merge_sequence(existing: Option<&Value>, incoming: &[Value]) -> MergeOutcome {
    let base: &[Value] = match existing {
        Some(Value::Sequence(items)) => items,
        _ => &[],
    };

    let mut seen = HashSet::with_capacity(base.len() + incoming.len());
    let mut merged = Vec::with_capacity(base.len() + incoming.len());

    for item in base {
        if seen.insert(item.string_form()) {
            merged.push(item.clone());
        }
    }

    let mut changed = false;
    for item in incoming {
        if seen.insert(item.string_form()) {
            merged.push(item.clone());
            changed = true;
        }
    }

    MergeOutcome::settle(existing, Value::Sequence(merged), changed)
}

fn merge_mapping(existing: Option<&Value>, incoming: &Document) -> MergeOutcome {
    let mut merged = match existing {
        Some(Value::Mapping(entries)) => entries.clone(),
        _ => Document::new(),
    };

    // Shallow: a key already present keeps its value even if both sides are mappings.
    let mut changed = false;
    for (key, value) in incoming {
        if let Entry::Vacant(slot) = merged.entry(key.clone()) {
            slot.insert(value.clone());
            changed = true;
        }
    }

    MergeOutcome::settle(existing, Value::Mapping(merged), changed)
}

fn merge_scalar(existing: Option<&Value>, incoming: &Value) -> MergeOutcome {
    match existing {
        Some(current) if !current.is_empty_string() => MergeOutcome::kept(existing),
        _ => MergeOutcome {
            merged: Some(incoming.clone()),
            changed: existing != Some(incoming),
        },
    }
}
