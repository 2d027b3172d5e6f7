//! Plugin → declaration catalog.
//!
//! | plugin           | Info.plist                              | entitlements               |
//! |------------------|-----------------------------------------|----------------------------|
//! | `camera`         | `NSCameraUsageDescription`              |                            |
//! | `gps`            | `NSLocationWhenInUseUsageDescription`   |                            |
//! | `biometric`      | `NSFaceIDUsageDescription`              |                            |
//! | `push`           | `UIBackgroundModes: [remote-notification]` | `aps-environment`       |
//! | `secure_storage` |                                         | `keychain-access-groups`   |

use novabridge_types::{Document, Plugin, PluginFlags, Value};

use crate::config::PatchConfig;

/// Document keys written by the catalog.
pub mod keys {
    pub const CAMERA_USAGE: &str = "NSCameraUsageDescription";
    pub const LOCATION_WHEN_IN_USE_USAGE: &str = "NSLocationWhenInUseUsageDescription";
    pub const FACE_ID_USAGE: &str = "NSFaceIDUsageDescription";
    pub const BACKGROUND_MODES: &str = "UIBackgroundModes";
    pub const APS_ENVIRONMENT: &str = "aps-environment";
    pub const KEYCHAIN_ACCESS_GROUPS: &str = "keychain-access-groups";

    /// The `UIBackgroundModes` entry required for remote push delivery.
    pub const REMOTE_NOTIFICATION_MODE: &str = "remote-notification";
}

/// Builds the addition sets for both documents from plugin flags.
#[derive(Clone, Debug, Default)]
pub struct RequirementBuilder {
    config: PatchConfig,
}

impl RequirementBuilder {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    /// Declarations the enabled plugins need in `Info.plist`.
    pub fn info_plist_additions(&self, flags: &PluginFlags) -> Document {
        let mut add = Document::new();
        for plugin in flags.enabled() {
            let entry = match plugin {
                Plugin::Camera => Some((
                    keys::CAMERA_USAGE,
                    Value::string(&self.config.camera_usage_description),
                )),
                Plugin::Gps => Some((
                    keys::LOCATION_WHEN_IN_USE_USAGE,
                    Value::string(&self.config.location_usage_description),
                )),
                Plugin::Biometric => Some((
                    keys::FACE_ID_USAGE,
                    Value::string(&self.config.face_id_usage_description),
                )),
                Plugin::Push => Some((
                    keys::BACKGROUND_MODES,
                    Value::strings([keys::REMOTE_NOTIFICATION_MODE]),
                )),
                Plugin::SecureStorage => None,
            };
            if let Some((key, value)) = entry {
                add.insert(key.to_string(), value);
            }
        }
        add
    }

    /// Declarations the enabled plugins need in `App.entitlements`.
    pub fn entitlements_additions(&self, flags: &PluginFlags) -> Document {
        let mut add = Document::new();
        if flags.is_enabled(Plugin::Push) {
            add.insert(
                keys::APS_ENVIRONMENT.to_string(),
                Value::string(self.config.aps_environment.as_str()),
            );
        }
        if flags.is_enabled(Plugin::SecureStorage) {
            add.insert(
                keys::KEYCHAIN_ACCESS_GROUPS.to_string(),
                Value::strings([self.config.keychain_access_group.as_str()]),
            );
        }
        add
    }
}

/// [`RequirementBuilder::info_plist_additions`] with the default configuration.
pub fn build_info_plist_additions(flags: &PluginFlags) -> Document {
    RequirementBuilder::default().info_plist_additions(flags)
}

/// [`RequirementBuilder::entitlements_additions`] with the default configuration.
pub fn build_entitlements_additions(flags: &PluginFlags) -> Document {
    RequirementBuilder::default().entitlements_additions(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApsEnvironment;

    #[test]
    fn no_flags_no_additions() {
        let flags = PluginFlags::new();
        assert!(build_info_plist_additions(&flags).is_empty());
        assert!(build_entitlements_additions(&flags).is_empty());
    }

    #[test]
    fn camera_adds_usage_description_only() {
        let flags = PluginFlags::with_enabled([Plugin::Camera]);
        let info = build_info_plist_additions(&flags);
        assert_eq!(info.len(), 1);
        assert_eq!(
            info[keys::CAMERA_USAGE],
            Value::string("This app requires camera access.")
        );
        assert!(build_entitlements_additions(&flags).is_empty());
    }

    #[test]
    fn gps_and_biometric_add_usage_descriptions() {
        let flags = PluginFlags::with_enabled([Plugin::Gps, Plugin::Biometric]);
        let info = build_info_plist_additions(&flags);
        assert_eq!(
            info[keys::LOCATION_WHEN_IN_USE_USAGE],
            Value::string("This app uses your location to provide location-based features.")
        );
        assert_eq!(
            info[keys::FACE_ID_USAGE],
            Value::string("This app uses Face ID to protect your data.")
        );
        assert!(build_entitlements_additions(&flags).is_empty());
    }

    #[test]
    fn push_touches_both_documents() {
        let flags = PluginFlags::with_enabled([Plugin::Push]);
        let info = build_info_plist_additions(&flags);
        assert_eq!(
            info[keys::BACKGROUND_MODES],
            Value::strings(["remote-notification"])
        );

        let ent = build_entitlements_additions(&flags);
        assert_eq!(ent.len(), 1);
        assert_eq!(ent[keys::APS_ENVIRONMENT], Value::string("development"));
    }

    #[test]
    fn secure_storage_adds_templated_access_group() {
        let flags = PluginFlags::with_enabled([Plugin::SecureStorage]);
        assert!(build_info_plist_additions(&flags).is_empty());

        let ent = build_entitlements_additions(&flags);
        assert_eq!(
            ent[keys::KEYCHAIN_ACCESS_GROUPS],
            Value::strings(["$(AppIdentifierPrefix)$(PRODUCT_BUNDLE_IDENTIFIER)"])
        );
    }

    #[test]
    fn every_plugin_enabled() {
        let flags = PluginFlags::with_enabled(Plugin::ALL);
        assert_eq!(build_info_plist_additions(&flags).len(), 4);
        assert_eq!(build_entitlements_additions(&flags).len(), 2);
    }

    #[test]
    fn disabled_plugin_contributes_nothing() {
        for plugin in Plugin::ALL {
            let mut flags = PluginFlags::with_enabled(Plugin::ALL);
            flags.set(plugin, false);
            let all_info = build_info_plist_additions(&PluginFlags::with_enabled(Plugin::ALL));
            let info = build_info_plist_additions(&flags);
            let ent = build_entitlements_additions(&flags);
            match plugin {
                Plugin::Camera => assert!(!info.contains_key(keys::CAMERA_USAGE)),
                Plugin::Gps => assert!(!info.contains_key(keys::LOCATION_WHEN_IN_USE_USAGE)),
                Plugin::Biometric => assert!(!info.contains_key(keys::FACE_ID_USAGE)),
                Plugin::Push => {
                    assert!(!info.contains_key(keys::BACKGROUND_MODES));
                    assert!(!ent.contains_key(keys::APS_ENVIRONMENT));
                }
                Plugin::SecureStorage => {
                    assert!(!ent.contains_key(keys::KEYCHAIN_ACCESS_GROUPS));
                    assert_eq!(info, all_info);
                }
            }
        }
    }

    #[test]
    fn builds_are_structurally_equal() {
        let flags = PluginFlags::with_enabled(Plugin::ALL);
        assert_eq!(build_info_plist_additions(&flags), build_info_plist_additions(&flags));
        assert_eq!(
            build_entitlements_additions(&flags),
            build_entitlements_additions(&flags)
        );
    }

    #[test]
    fn custom_config_flows_into_additions() {
        let builder = RequirementBuilder::new(PatchConfig {
            camera_usage_description: "Scan receipts.".into(),
            aps_environment: ApsEnvironment::Production,
            keychain_access_group: "TEAM.com.example.shared".into(),
            ..PatchConfig::default()
        });
        let flags = PluginFlags::with_enabled(Plugin::ALL);

        let info = builder.info_plist_additions(&flags);
        assert_eq!(info[keys::CAMERA_USAGE], Value::string("Scan receipts."));

        let ent = builder.entitlements_additions(&flags);
        assert_eq!(ent[keys::APS_ENVIRONMENT], Value::string("production"));
        assert_eq!(
            ent[keys::KEYCHAIN_ACCESS_GROUPS],
            Value::strings(["TEAM.com.example.shared"])
        );
    }
}
