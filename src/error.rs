//! Error types for the castlist engine and its adapters.
//!
//! Every variant is local to one interaction: handlers log it and answer the user,
//! the process keeps serving other guilds.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CastlistError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CastlistError {
    /// A role, castlist or guild record the request depends on is missing.
    #[error("{what} not found: {key}")]
    NotFound { what: &'static str, key: String },

    /// Malformed or unusable navigation data (usually a custom_id).
    #[error("invalid navigation state: {0}")]
    InvalidState(String),

    /// The castlist name leaves no room for navigation ids within Discord's limit.
    #[error("castlist name {castlist:?} is too long for a {max}-character custom_id")]
    NameTooLong { castlist: String, max: usize },

    /// Not even a single member card fits the page budget.
    #[error("a page needs {needed} components for one member but the budget is {budget}")]
    CapacityExceeded { needed: usize, budget: usize },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("discord request failed: {0}")]
    Discord(#[from] serenity::Error),
}

impl CastlistError {
    pub fn not_found(what: &'static str, key: impl Into<String>) -> Self {
        CastlistError::NotFound {
            what,
            key: key.into(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        CastlistError::InvalidState(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
