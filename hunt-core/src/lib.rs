//! Core types for the puzzle-hunt site: the immutable puzzle catalog,
//! the front-matter convention, and the directory-tree loader.
//!
//! The loader never terminates the process. It returns a [`LoadError`]
//! describing the offending file or field, and the binary decides what a
//! fatal startup failure means.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod error;
pub mod front_matter;

pub use catalog::{Catalog, Puzzle, PuzzleMeta};
pub use error::LoadError;
pub use front_matter::SplitError;
