//! Crate-level error types.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Internal inconsistency between a group index and its route map.
///
/// Bad input never produces this; it means the index was built from a
/// different map or edited by hand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    /// The index names a representative that the map does not contain.
    #[error("group '{group}' has representative '{key}' missing from the route map")]
    MissingRepresentative { group: String, key: String },

    /// No route in the map belongs to the group.
    #[error("group '{0}' has no member routes")]
    EmptyGroup(String),
}

/// Errors surfaced by startup and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table integrity error: {0}")]
    Integrity(#[from] IntegrityError),
}

/// Result type for route mapping operations.
pub type Result<T> = std::result::Result<T, Error>;
