//! Shared request-handler state.

use std::path::PathBuf;

use hunt_core::Catalog;

use crate::config::ServerConfig;

/// Immutable state shared by every handler.
///
/// The catalog is constructed before the listener starts accepting, so no
/// request can observe it partially populated; immutability after
/// construction is the only concurrency mechanism needed.
#[derive(Debug)]
pub struct SiteState {
    /// The loaded puzzle catalog.
    pub catalog: Catalog,
    /// Root of the on-disk puzzle tree; attachments are served from here.
    pub content_dir: PathBuf,
    /// Directory holding `index.html` (the page template) and static assets.
    pub layout_dir: PathBuf,
}

impl SiteState {
    /// Bundle a loaded catalog with the directories handlers read from.
    #[must_use]
    pub fn new(catalog: Catalog, config: &ServerConfig) -> Self {
        Self {
            catalog,
            content_dir: config.content_dir.clone(),
            layout_dir: config.layout_dir.clone(),
        }
    }
}
