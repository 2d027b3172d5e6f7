use std::io;
use std::path::PathBuf;

/// Errors produced while loading or validating a [`PatchConfig`](crate::PatchConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid TOML or has unexpected fields.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field that must carry text is empty.
    #[error("config field '{0}' must not be empty")]
    EmptyField(&'static str),
}
