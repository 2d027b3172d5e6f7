use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::TypeError;

/// A NovaBridge plugin with iOS declaration requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Plugin {
    Camera,
    Gps,
    Push,
    SecureStorage,
    Biometric,
}

impl Plugin {
    /// Every known plugin.
    pub const ALL: [Plugin; 5] = [
        Plugin::Camera,
        Plugin::Gps,
        Plugin::Push,
        Plugin::SecureStorage,
        Plugin::Biometric,
    ];

    /// The identifier used in the flags payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Gps => "gps",
            Self::Push => "push",
            Self::SecureStorage => "secure_storage",
            Self::Biometric => "biometric",
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plugin {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| TypeError::UnknownPlugin(s.to_string()))
    }
}

/// Which plugins are enabled for this build.
///
/// A plugin that is absent, `null`, or `false` in the payload is disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluginFlags {
    enabled: BTreeSet<Plugin>,
}

impl PluginFlags {
    /// No plugins enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags with exactly the given plugins enabled.
    pub fn with_enabled(plugins: impl IntoIterator<Item = Plugin>) -> Self {
        Self {
            enabled: plugins.into_iter().collect(),
        }
    }

    /// Enable or disable a plugin.
    pub fn set(&mut self, plugin: Plugin, enabled: bool) {
        if enabled {
            self.enabled.insert(plugin);
        } else {
            self.enabled.remove(&plugin);
        }
    }

    /// Returns `true` if the plugin is enabled.
    pub fn is_enabled(&self, plugin: Plugin) -> bool {
        self.enabled.contains(&plugin)
    }

    /// Enabled plugins in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Plugin> + '_ {
        self.enabled.iter().copied()
    }

    /// Returns `true` if no plugin is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Parse a JSON object such as `{"camera":true,"push":false}`.
    pub fn from_json(payload: &str) -> Result<Self, TypeError> {
        let json: JsonValue =
            serde_json::from_str(payload).map_err(|e| TypeError::InvalidJson(e.to_string()))?;
        Self::from_json_value(&json)
    }

    /// Interpret an already-parsed JSON value as plugin flags.
    ///
    /// Unknown keys are skipped so newer payloads keep working with older
    /// binaries. A known key is enabled when its value is truthy: `false`,
    /// `null`, zero and `""` disable it, anything else enables it.
    pub fn from_json_value(json: &JsonValue) -> Result<Self, TypeError> {
        let object = json
            .as_object()
            .ok_or_else(|| TypeError::NotAnObject(json_kind(json)))?;

        let mut flags = Self::new();
        for (key, value) in object {
            let Ok(plugin) = key.parse::<Plugin>() else {
                debug!(key = %key, "ignoring unknown plugin flag");
                continue;
            };
            flags.set(plugin, is_truthy(value));
        }
        Ok(flags)
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
