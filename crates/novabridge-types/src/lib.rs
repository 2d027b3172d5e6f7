//! Foundation types for NovaBridge iOS plugin injection.
//!
//! This crate provides the value model shared by every other NovaBridge crate:
//! property-list documents as a closed tagged variant, the fixed set of known
//! plugins, and the flag mapping that selects which plugins are enabled.
//!
//! # Key Types
//!
//! - [`Value`] / [`Scalar`] — A property-list value: scalar, sequence, or mapping
//! - [`Document`] — A top-level property-list dictionary
//! - [`Plugin`] — One of the known NovaBridge plugins
//! - [`PluginFlags`] — Enabled/disabled state per plugin, parsed from JSON

pub mod error;
pub mod plugin;
pub mod value;

pub use error::TypeError;
pub use plugin::{Plugin, PluginFlags};
pub use value::{Document, Scalar, Value};
