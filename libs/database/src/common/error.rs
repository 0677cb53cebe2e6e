use std::path::PathBuf;

/// Unified database error type
///
/// Every variant is fatal for the connection bootstrap; none is retried.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver errors (URI parsing, client construction)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Certificate material is missing, unreadable or malformed
    #[error("Certificate error for '{}': {details}", .path.display())]
    Certificate { path: PathBuf, details: String },

    /// The cluster could not be reached, authenticated against, or selected in time
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DatabaseError {
    pub(crate) fn certificate(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Certificate {
            path: path.into(),
            details: details.into(),
        }
    }
}

#[cfg(feature = "config")]
impl From<core_config::ConfigError> for DatabaseError {
    fn from(err: core_config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
