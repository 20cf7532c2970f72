//! HTTP surface for the puzzle-hunt site.
//!
//! Serves the landing page, per-puzzle pages with downloadable
//! attachments, and the answer-check endpoint, all over a catalog loaded
//! once by `hunt-core` and shared read-only across handlers.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
