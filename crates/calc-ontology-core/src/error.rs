//! Unified error type for the calc-ontology library.

use thiserror::Error;

use crate::similarity::SimilarityError;

/// Errors from loading or reading the ontology document.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// The ontology file could not be read.
    #[error("Failed to read ontology file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The ontology file is not a valid document.
    #[error("Failed to parse ontology file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level unified error type.
///
/// All library errors are convertible to this type via `From`
/// implementations. The web layer maps any `CoreError` reaching a
/// handler to a generic server-error response.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Vector similarity computation failed.
    ///
    /// With validated vocabularies this indicates a bug (the builtin
    /// vectors share one dimension and are non-zero).
    #[error("Similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    /// Ontology load or parse failure. Fatal at startup.
    #[error("Ontology error: {0}")]
    Ontology(#[from] OntologyError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error indicating a bug or system failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Create a configuration error from a message.
    #[inline]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error from a message.
    #[inline]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result type alias for calc-ontology operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
