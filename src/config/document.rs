//! On-disk plugin configuration documents
//!
//! A document is either a bare JSON array of plugin entries or a host object
//! carrying `options.babel.plugins`.

use super::{ConfigurationTarget, PluginConfig, PluginTarget};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A plugin configuration as read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigDocument {
    /// A raw plugin list
    List(Vec<PluginConfig>),
    /// An application/addon-like host object
    Target(ConfigurationTarget),
}

impl ConfigDocument {
    /// Load a document from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::config_error(format!("Invalid plugin configuration: {}", e)))
    }

    /// Pretty-printed JSON for writing back to disk
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::config_error(format!("Failed to serialize configuration: {}", e)))
    }

    /// Write the document to `path`, replacing its contents.
    ///
    /// Keys whose value was an explicit `null` on a known level (`options`,
    /// `babel`, `plugins`, an inline plugin's `name`) are written back omitted.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl PluginTarget for ConfigDocument {
    fn plugins(&self) -> &[PluginConfig] {
        match self {
            ConfigDocument::List(list) => list,
            ConfigDocument::Target(target) => target.plugins(),
        }
    }

    fn plugins_mut(&mut self) -> &mut Vec<PluginConfig> {
        match self {
            ConfigDocument::List(list) => list,
            ConfigDocument::Target(target) => target.plugins_mut(),
        }
    }
}
