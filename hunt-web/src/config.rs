//! Environment-driven server configuration.

use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the TCP listener binds to.
    pub listen_addr: String,
    /// Root of the on-disk puzzle tree.
    pub content_dir: PathBuf,
    /// Directory holding the shared page template and static assets.
    pub layout_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `HUNT_LISTEN_ADDR`, `HUNT_CONTENT_DIR`,
    /// `HUNT_LAYOUT_DIR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("HUNT_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_owned()),
            content_dir: std::env::var("HUNT_CONTENT_DIR")
                .map_or_else(|_| PathBuf::from("puzzles"), PathBuf::from),
            layout_dir: std::env::var("HUNT_LAYOUT_DIR")
                .map_or_else(|_| PathBuf::from("layout"), PathBuf::from),
        }
    }
}
