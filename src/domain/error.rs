use std::io;

use thiserror::Error;

/// Library-wide error type for logoforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No API key present at generation time.
    #[error("Runware API key required: enter your API key before generating")]
    MissingCredential,

    /// A single call to the image service failed (network, auth, quota,
    /// malformed response).
    #[error("Runware request failed: {message}")]
    RemoteGeneration { message: String, status: Option<u16> },

    /// An orchestration run aborted because one of its calls failed. Partial
    /// results are discarded, never carried on this variant.
    #[error("Logo generation failed on image {index} of {requested}: {message}")]
    GenerationFailed { index: usize, requested: usize, message: String },

    /// A generation run is already in progress for this session.
    #[error("A generation run is already in progress")]
    GenerationInFlight,

    /// Fetching a result URL to disk failed.
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// Config file named explicitly but absent.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MissingCredential
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigFileMissing(_) => io::ErrorKind::NotFound,
            AppError::GenerationInFlight => io::ErrorKind::ResourceBusy,
            AppError::RemoteGeneration { .. }
            | AppError::GenerationFailed { .. }
            | AppError::Download { .. } => io::ErrorKind::Other,
        }
    }
}
