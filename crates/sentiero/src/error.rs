//! Error types.

use thiserror::Error;

/// Errors surfaced by menu construction helpers.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A view's symbolic name could not be resolved to a URL.
    #[error("failed to resolve url for view '{urlname}'")]
    Resolve {
        urlname: String,
        #[source]
        source: anyhow::Error,
    },

    /// A declarative menu source could not be parsed.
    #[error("invalid menu definition from '{source_name}': {details}")]
    InvalidDefinition { source_name: String, details: String },
}
