//! The puzzle catalog and its directory-tree loader.
//!
//! Layout contract, relative to the content root:
//!
//! ```text
//! <root>/index.html          landing-page markup
//! <root>/<id>/index.html     front matter + body, one per puzzle
//! <root>/<id>/*              anything else is a servable attachment
//! ```
//!
//! The catalog is built once, before the server starts accepting
//! connections, and is never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::front_matter;

/// Metadata declared in a puzzle's front-matter block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleMeta {
    /// Display title. Required non-empty.
    #[serde(default)]
    pub title: String,
    /// Acceptable answers, compared with exact, case-sensitive equality.
    /// At least one is required.
    #[serde(default)]
    pub answers: Vec<String>,
    /// Hints shown on the puzzle page.
    #[serde(default)]
    pub hints: Vec<String>,
}

/// One puzzle-hunt entry.
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    /// Directory name; unique within the catalog and used as the routing key.
    pub id: String,
    /// Parsed front matter.
    pub meta: PuzzleMeta,
    /// Body markup following the front-matter block.
    pub content: String,
    /// Attachment filenames co-located with the puzzle. Only names recorded
    /// here are ever served.
    pub files: Vec<String>,
}

/// The full set of loaded puzzles plus the shared landing-page markup.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Raw markup for the landing page.
    pub index: String,
    /// Puzzles in directory-listing order.
    pub puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Load a catalog from the directory tree rooted at `root`.
    ///
    /// # Errors
    /// Returns a [`LoadError`] naming the offending file or field on any
    /// structural problem: missing root or landing page, a puzzle without a
    /// content file, malformed front matter, an empty title, or an empty
    /// answer list.
    pub fn load(root: &Path) -> Result<Self, LoadError> {
        if !root.is_dir() {
            return Err(LoadError::RootNotFound { path: root.to_path_buf() });
        }

        let index_path = root.join("index.html");
        let index = fs::read_to_string(&index_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::IndexNotFound { path: index_path.clone() }
            } else {
                LoadError::Io { path: index_path.clone(), source }
            }
        })?;

        let mut puzzles = Vec::new();
        for entry in read_dir(root)? {
            let entry = entry.map_err(|source| LoadError::Io {
                path: root.to_path_buf(),
                source,
            })?;
            let is_dir = entry
                .file_type()
                .map_err(|source| LoadError::Io { path: entry.path(), source })?
                .is_dir();
            if !is_dir {
                continue;
            }
            let id = entry.file_name().to_string_lossy().into_owned();
            puzzles.push(load_puzzle(&entry.path(), id)?);
        }

        Ok(Self { index, puzzles })
    }

    /// Look up a puzzle by exact identifier match.
    #[must_use]
    pub fn puzzle(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }
}

fn read_dir(path: &Path) -> Result<fs::ReadDir, LoadError> {
    fs::read_dir(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

fn load_puzzle(dir: &Path, id: String) -> Result<Puzzle, LoadError> {
    let content_path = dir.join("index.html");
    let raw = fs::read_to_string(&content_path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::PuzzleIndexNotFound { id: id.clone(), path: content_path.clone() }
        } else {
            LoadError::Io { path: content_path.clone(), source }
        }
    })?;

    let (front, content) = front_matter::split(&raw)
        .map_err(|source| LoadError::FrontMatter { id: id.clone(), source })?;
    let meta: PuzzleMeta = serde_yaml_ng::from_str(front)
        .map_err(|source| LoadError::Metadata { id: id.clone(), source })?;

    if meta.title.is_empty() {
        return Err(LoadError::EmptyTitle { id });
    }
    if meta.answers.is_empty() {
        return Err(LoadError::NoAnswers { id });
    }

    let mut files = Vec::new();
    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_dir = entry
            .file_type()
            .map_err(|source| LoadError::Io { path: entry.path(), source })?
            .is_dir();
        if is_dir {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != "index.html" {
            files.push(name);
        }
    }

    Ok(Puzzle { id, meta, content: content.to_owned(), files })
}
