//! Front-matter splitting for puzzle content files.
//!
//! A content file must begin with the literal marker line `<!--\n`. The
//! metadata block is everything between that line and the first `-->\n`;
//! the body is everything after the terminator, starting at the byte
//! immediately following its newline.

const OPEN: &str = "<!--\n";
const CLOSE: &str = "-->\n";

/// Reasons a content file can fail front-matter splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SplitError {
    /// The file does not begin with the `<!--` marker line.
    #[error("content must begin with a `<!--` front-matter line")]
    MissingOpeningMarker,

    /// No `-->` terminator line was found.
    #[error("front matter has no closing `-->` line")]
    MissingClosingMarker,
}

/// Split a content file into its front-matter block and body.
///
/// Both returned slices borrow from the input; the body starts exactly at
/// the byte after the terminator's newline.
///
/// # Errors
/// Returns a [`SplitError`] if either marker is absent. A file without
/// front matter is not a valid puzzle.
pub fn split(input: &str) -> Result<(&str, &str), SplitError> {
    if !input.starts_with(OPEN) {
        return Err(SplitError::MissingOpeningMarker);
    }
    let close = input.find(CLOSE).ok_or(SplitError::MissingClosingMarker)?;
    Ok((&input[OPEN.len()..close], &input[close + CLOSE.len()..]))
}
