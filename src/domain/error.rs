use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for factory-injector operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Tool configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// Target config file (or its parent directory) cannot be written.
    #[error(
        "Cannot write factory configuration to '{}': file or parent directory is not writable",
        .0.display()
    )]
    ResourceNotWritable(PathBuf),

    /// Existing config file could not be read as a factory mapping.
    #[error("Invalid factory configuration in '{}': {details}", .path.display())]
    ConfigIntegrity { path: PathBuf, details: String },

    /// Class or factory name is not a well-formed type identifier.
    #[error(
        "Invalid type identifier '{0}': expected a namespaced class name such as App\\Handler\\PingHandler"
    )]
    InvalidTypeIdentifier(String),

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn integrity<P: Into<PathBuf>, S: Into<String>>(path: P, details: S) -> Self {
        AppError::ConfigIntegrity { path: path.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidTypeIdentifier(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigIntegrity { .. } => io::ErrorKind::InvalidData,
            AppError::ResourceNotWritable(_) => io::ErrorKind::PermissionDenied,
            AppError::Template(_) => io::ErrorKind::Other,
        }
    }
}
