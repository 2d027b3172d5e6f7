use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid plugin flags JSON: {0}")]
    InvalidJson(String),

    #[error("plugin flags must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),
}
