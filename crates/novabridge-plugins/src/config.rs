use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Push notification environment granted by `aps-environment`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApsEnvironment {
    #[default]
    Development,
    Production,
}

impl ApsEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for ApsEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declaration values written on behalf of each plugin.
///
/// Every field is optional in TOML; omitted fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// `NSCameraUsageDescription` for the camera plugin.
    pub camera_usage_description: String,
    /// `NSLocationWhenInUseUsageDescription` for the gps plugin.
    pub location_usage_description: String,
    /// `NSFaceIDUsageDescription` for the biometric plugin.
    pub face_id_usage_description: String,
    /// `aps-environment` for the push plugin.
    pub aps_environment: ApsEnvironment,
    /// `keychain-access-groups` entry for the secure_storage plugin. Xcode
    /// expands the build-setting references at signing time.
    pub keychain_access_group: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            camera_usage_description: "This app requires camera access.".into(),
            location_usage_description:
                "This app uses your location to provide location-based features.".into(),
            face_id_usage_description: "This app uses Face ID to protect your data.".into(),
            aps_environment: ApsEnvironment::Development,
            keychain_access_group: "$(AppIdentifierPrefix)$(PRODUCT_BUNDLE_IDENTIFIER)".into(),
        }
    }
}

impl PatchConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), "loaded patch config");
        Ok(config)
    }

    /// Reject values that would write empty declarations.
    ///
    /// An empty string would never satisfy the merge engine's "missing or
    /// empty" check, so every later run would report a change.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("camera_usage_description", &self.camera_usage_description),
            ("location_usage_description", &self.location_usage_description),
            ("face_id_usage_description", &self.face_id_usage_description),
            ("keychain_access_group", &self.keychain_access_group),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }
}
