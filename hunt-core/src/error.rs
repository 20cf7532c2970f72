//! Error types for catalog loading.

use std::path::PathBuf;

use crate::front_matter::SplitError;

/// Errors that can occur while loading the puzzle catalog.
///
/// Every variant is a startup-time contract violation. There is no partial
/// success: the caller gets a complete catalog or one of these.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The content root directory does not exist.
    #[error("puzzle directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// The shared landing page (`<root>/index.html`) is missing.
    #[error("landing page not found: {path}")]
    IndexNotFound { path: PathBuf },

    /// A puzzle directory has no `index.html`.
    #[error("puzzle '{id}': content file not found: {path}")]
    PuzzleIndexNotFound { id: String, path: PathBuf },

    /// A puzzle content file does not follow the front-matter convention.
    #[error("puzzle '{id}': {source}")]
    FrontMatter { id: String, source: SplitError },

    /// The front-matter block failed to deserialize.
    #[error("puzzle '{id}': invalid front matter: {source}")]
    Metadata {
        id: String,
        source: serde_yaml_ng::Error,
    },

    /// A puzzle declared an empty (or missing) title.
    #[error("puzzle '{id}': title must not be empty")]
    EmptyTitle { id: String },

    /// A puzzle declared no acceptable answers.
    #[error("puzzle '{id}': at least one answer is required")]
    NoAnswers { id: String },

    /// An underlying filesystem error while reading content.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
