use std::io;
use std::path::PathBuf;

/// Errors produced at the property-list file boundary.
#[derive(Debug, thiserror::Error)]
pub enum PlistIoError {
    /// Reading, creating, or writing a file failed.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Non-empty content is not a valid property list.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// Serializing the document failed.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// The root of the property list is not a dictionary.
    #[error("root of {path} must be a dictionary, got {kind}")]
    NotADictionary { path: PathBuf, kind: &'static str },

    /// A value kind the document model does not carry (e.g. keyed-archive UIDs).
    #[error("unsupported {kind} value at '{key_path}'")]
    UnsupportedValue { key_path: String, kind: &'static str },

    /// A date string that is not in plist XML form.
    #[error("invalid date '{value}' at '{key_path}'")]
    InvalidDate { key_path: String, value: String },

    /// An integer outside both the signed and unsigned 64-bit ranges.
    #[error("integer {value} at '{key_path}' does not fit in 64 bits")]
    IntegerOutOfRange { key_path: String, value: i128 },
}

/// Convenience alias used throughout the plist crate.
pub type Result<T> = std::result::Result<T, PlistIoError>;
