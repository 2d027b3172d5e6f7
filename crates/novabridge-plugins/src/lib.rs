//! Plugin requirements and patch orchestration for NovaBridge.
//!
//! Maps enabled plugins to the `Info.plist` and `App.entitlements`
//! declarations they need, then runs the additive merge engine once per
//! document.
//!
//! # Key Types
//!
//! - [`RequirementBuilder`] — Builds the per-document addition sets from plugin flags
//! - [`PatchConfig`] — Declaration strings, overridable from TOML
//! - [`PluginPatcher`] / [`apply_plugin_patches`] — Patch both documents in one call
//! - [`PluginPatchReport`] / [`PatchSummary`] — Combined result and its serializable summary

pub mod config;
pub mod error;
pub mod patcher;
pub mod requirements;

pub use config::{ApsEnvironment, PatchConfig};
pub use error::ConfigError;
pub use patcher::{apply_plugin_patches, PatchSummary, PluginPatchReport, PluginPatcher};
pub use requirements::{
    build_entitlements_additions, build_info_plist_additions, keys, RequirementBuilder,
};
