use novabridge_merge::apply_additive_patch;
use novabridge_types::{Document, PluginFlags};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PatchConfig;
use crate::requirements::RequirementBuilder;

/// Both patched documents plus what changed in each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PluginPatchReport {
    pub next_info_plist: Document,
    pub next_entitlements: Document,
    pub info_plist_changed: bool,
    pub entitlements_changed: bool,
    pub added_info_plist_keys: Vec<String>,
    pub added_entitlement_keys: Vec<String>,
}

impl PluginPatchReport {
    /// Returns `true` if either document needs writing.
    pub fn any_changed(&self) -> bool {
        self.info_plist_changed || self.entitlements_changed
    }

    /// The machine-readable summary printed by the CLI.
    pub fn summary(&self) -> PatchSummary {
        PatchSummary {
            ok: true,
            info_plist_changed: self.info_plist_changed,
            entitlements_changed: self.entitlements_changed,
            added_info_plist_keys: self.added_info_plist_keys.clone(),
            added_entitlement_keys: self.added_entitlement_keys.clone(),
        }
    }
}

/// Serializable run summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSummary {
    pub ok: bool,
    pub info_plist_changed: bool,
    pub entitlements_changed: bool,
    pub added_info_plist_keys: Vec<String>,
    pub added_entitlement_keys: Vec<String>,
}

/// Applies plugin requirements to `Info.plist` and `App.entitlements`.
#[derive(Clone, Debug, Default)]
pub struct PluginPatcher {
    requirements: RequirementBuilder,
}

impl PluginPatcher {
    pub fn new(config: PatchConfig) -> Self {
        Self {
            requirements: RequirementBuilder::new(config),
        }
    }

    /// Patch both documents. The two merges are independent of each other.
    pub fn apply(
        &self,
        info_plist: &Document,
        entitlements: &Document,
        flags: &PluginFlags,
    ) -> PluginPatchReport {
        let info_add = self.requirements.info_plist_additions(flags);
        let ent_add = self.requirements.entitlements_additions(flags);

        let info = apply_additive_patch(info_plist, &info_add);
        let ent = apply_additive_patch(entitlements, &ent_add);

        info!(
            info_plist_changed = info.changed,
            entitlements_changed = ent.changed,
            added = info.added_keys.len() + ent.added_keys.len(),
            "plugin patches computed"
        );

        PluginPatchReport {
            next_info_plist: info.document,
            next_entitlements: ent.document,
            info_plist_changed: info.changed,
            entitlements_changed: ent.changed,
            added_info_plist_keys: info.added_keys,
            added_entitlement_keys: ent.added_keys,
        }
    }
}

/// [`PluginPatcher::apply`] with the default configuration.
pub fn apply_plugin_patches(
    info_plist: &Document,
    entitlements: &Document,
    flags: &PluginFlags,
) -> PluginPatchReport {
    PluginPatcher::default().apply(info_plist, entitlements, flags)
}
