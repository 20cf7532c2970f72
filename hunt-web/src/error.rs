//! Error types for the web crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur during request handling.
///
/// Each variant owns one failure path; none of them disturbs the server
/// process. Responses carry only a status code: the site's pages are the
/// UI, and server-side detail stays in the log.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SiteError {
    /// The shared layout template could not be read or rendered.
    #[error("template error: {0}")]
    Template(String),

    /// No puzzle with the requested identifier exists.
    #[error("puzzle not found: {0}")]
    PuzzleNotFound(String),

    /// The requested file is not a recorded attachment of the puzzle.
    #[error("attachment not found: {puzzle}/{file}")]
    AttachmentNotFound { puzzle: String, file: String },

    /// The submitted guess matched none of the puzzle's answers.
    #[error("no matching answer for puzzle '{0}'")]
    GuessIncorrect(String),

    /// A required form field was blank or missing.
    #[error("form field '{0}' must not be blank")]
    BlankField(&'static str),

    /// A guess referenced an unknown puzzle identifier. Deliberately a
    /// client error, matching the site's lenient status usage.
    #[error("unknown puzzle: {0}")]
    UnknownPuzzle(String),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match &self {
            SiteError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::PuzzleNotFound(_)
            | SiteError::AttachmentNotFound { .. }
            | SiteError::GuessIncorrect(_) => StatusCode::NOT_FOUND,
            SiteError::BlankField(_) | SiteError::UnknownPuzzle(_) => StatusCode::BAD_REQUEST,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        status.into_response()
    }
}
