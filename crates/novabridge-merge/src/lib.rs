//! Additive merge engine for NovaBridge.
//!
//! Combines a desired set of declarations with an existing property-list
//! document. The merge only ever adds: existing non-empty values win, keys
//! are never removed, and re-applying the same additions reports no change.
//!
//! # Key Types
//!
//! - [`merge_value`] / [`MergeOutcome`] -- Merge a single value by shape
//! - [`apply_additive_patch`] / [`PatchOutcome`] -- Merge a whole addition set into a document

pub mod patch;
pub mod value;

pub use patch::{apply_additive_patch, PatchOutcome};
pub use value::{merge_value, MergeOutcome};
