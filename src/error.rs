//! Error types for babel-plugin-helpers

use thiserror::Error;

/// Placeholder used in messages when a plugin's name cannot be determined
pub const UNRESOLVABLE_PLUGIN_NAME: &str = "<unresolvable plugin name>";

/// Main error type for plugin configuration edits
#[derive(Error, Debug)]
pub enum Error {
    /// The requested before/after constraints cannot all hold at once
    #[error("Unable to satisfy placement constraints for Babel plugin {plugin}")]
    PlacementConflict {
        /// Canonical (or best-effort) name of the plugin being inserted
        plugin: String,
    },

    /// Malformed host configuration or plugin entry
    #[error("ConfigError: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IOError: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a placement conflict for the given plugin name, if known
    pub fn placement_conflict(plugin: Option<String>) -> Self {
        Error::PlacementConflict {
            plugin: plugin.unwrap_or_else(|| UNRESOLVABLE_PLUGIN_NAME.to_string()),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Error::ConfigError(message.into())
    }

    /// Whether this error is a placement conflict
    pub fn is_placement_conflict(&self) -> bool {
        matches!(self, Error::PlacementConflict { .. })
    }
}

/// Result type alias for plugin configuration operations
pub type Result<T> = std::result::Result<T, Error>;
