//! Error types for RecipeBook
//!
//! Library code returns `RecipeBookError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for RecipeBook operations
pub type RecipeBookResult<T> = Result<T, RecipeBookError>;

/// Main error type for RecipeBook operations
#[derive(Error, Debug)]
pub enum RecipeBookError {
    /// The asset directory could not be listed
    #[error("failed to read asset directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered document could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Compiled widget HTML is missing from the dist directory
    #[error(
        "widget not found: {path}. Run 'cd server/ui-widget && npm install && npm run build' first."
    )]
    WidgetNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
