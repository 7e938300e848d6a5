//! Error types for Lume
//!
//! These stay internal to the engine: the host-facing lifecycle surface never
//! returns them. A failed rebuild degrades the field to its empty state.

use thiserror::Error;

/// The main error type for Lume operations
#[derive(Debug, Error)]
pub enum LumeError {
    #[error("Field allocation failed for {0} points")]
    AllocationFailed(usize),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Lume operations
pub type Result<T> = std::result::Result<T, LumeError>;

impl From<toml::de::Error> for LumeError {
    fn from(err: toml::de::Error) -> Self {
        LumeError::TomlParseError(err.to_string())
    }
}
