//! Babel plugin configuration model
//!
//! Mirrors the JSON shape the host build tool uses for its plugin pipeline:
//! an entry is a module string, an inline plugin object with an optional
//! `name`, or a `[plugin, options?, uniqueId?]` tuple. Host objects nest the
//! list under `options.babel.plugins`.

pub mod document;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use document::ConfigDocument;

/// A plugin reference: either a module to load or an inline implementation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BabelPlugin {
    /// Package name, scoped package name, or filesystem path
    Module(String),
    /// Inline implementation identified only by its optional `name` field
    Inline(InlinePlugin),
}

/// An inline plugin implementation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlinePlugin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Everything else on the object, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single element of the host's plugin list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginConfig {
    /// The plugin reference on its own
    Bare(BabelPlugin),
    /// Plugin with options and an optional unique id for repeated instances
    Tuple(PluginTuple),
}

/// `[plugin, options?, uniqueId?]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct PluginTuple {
    pub plugin: BabelPlugin,
    pub options: Option<Value>,
    pub unique_id: Option<Value>,
}

impl BabelPlugin {
    /// Reference a plugin by module name or path
    pub fn module(name: impl Into<String>) -> Self {
        BabelPlugin::Module(name.into())
    }

    /// An inline implementation with the given `name` field
    pub fn inline(name: Option<&str>) -> Self {
        BabelPlugin::Inline(InlinePlugin {
            name: name.map(str::to_string),
            extra: Map::new(),
        })
    }
}

impl From<BabelPlugin> for Value {
    fn from(plugin: BabelPlugin) -> Self {
        match plugin {
            BabelPlugin::Module(name) => Value::String(name),
            BabelPlugin::Inline(InlinePlugin { name, mut extra }) => {
                if let Some(name) = name {
                    extra.insert("name".to_string(), Value::String(name));
                }
                Value::Object(extra)
            }
        }
    }
}

impl TryFrom<Vec<Value>> for PluginTuple {
    type Error = String;

    fn try_from(items: Vec<Value>) -> std::result::Result<Self, Self::Error> {
        if items.is_empty() || items.len() > 3 {
            return Err(format!(
                "plugin tuple must have 1 to 3 elements, found {}",
                items.len()
            ));
        }
        let mut items = items.into_iter();
        let plugin = items.next().unwrap_or(Value::Null);
        let plugin = serde_json::from_value::<BabelPlugin>(plugin)
            .map_err(|e| format!("invalid plugin in tuple: {}", e))?;
        Ok(PluginTuple {
            plugin,
            options: items.next(),
            unique_id: items.next(),
        })
    }
}

impl From<PluginTuple> for Vec<Value> {
    fn from(tuple: PluginTuple) -> Self {
        let mut items = vec![Value::from(tuple.plugin)];
        match (tuple.options, tuple.unique_id) {
            (options, Some(id)) => {
                items.push(options.unwrap_or(Value::Null));
                items.push(id);
            }
            (Some(options), None) => items.push(options),
            (None, None) => {}
        }
        items
    }
}

impl PluginConfig {
    /// A bare entry referencing a module by name or path
    pub fn named(name: impl Into<String>) -> Self {
        PluginConfig::Bare(BabelPlugin::module(name))
    }

    /// A tuple entry carrying plugin options
    pub fn with_options(plugin: BabelPlugin, options: Value) -> Self {
        PluginConfig::Tuple(PluginTuple {
            plugin,
            options: Some(options),
            unique_id: None,
        })
    }

    /// Attach a unique id so the same plugin may appear more than once
    pub fn with_unique_id(self, id: impl Into<Value>) -> Self {
        let (plugin, options) = match self {
            PluginConfig::Bare(plugin) => (plugin, None),
            PluginConfig::Tuple(tuple) => (tuple.plugin, tuple.options),
        };
        PluginConfig::Tuple(PluginTuple {
            plugin,
            options,
            unique_id: Some(id.into()),
        })
    }

    /// The plugin this entry refers to
    pub fn plugin(&self) -> &BabelPlugin {
        match self {
            PluginConfig::Bare(plugin) => plugin,
            PluginConfig::Tuple(tuple) => &tuple.plugin,
        }
    }

    /// Options passed to the plugin, if any
    pub fn options(&self) -> Option<&Value> {
        match self {
            PluginConfig::Bare(_) => None,
            PluginConfig::Tuple(tuple) => tuple.options.as_ref(),
        }
    }

    /// Parse a plugin entry from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::config_error(format!("Invalid plugin entry: {}", e)))
    }
}

impl From<&str> for PluginConfig {
    fn from(name: &str) -> Self {
        PluginConfig::named(name)
    }
}

impl From<BabelPlugin> for PluginConfig {
    fn from(plugin: BabelPlugin) -> Self {
        PluginConfig::Bare(plugin)
    }
}

/// An application or addon whose `options.babel.plugins` may already be set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigurationTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TargetOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `options` level of a host object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel: Option<BabelOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `options.babel` level of a host object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BabelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginConfig>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigurationTarget {
    /// A host object with no options configured
    pub fn new() -> Self {
        Self::default()
    }

    /// A host object whose plugin list is already populated
    pub fn with_plugins(plugins: Vec<PluginConfig>) -> Self {
        ConfigurationTarget {
            options: Some(TargetOptions {
                babel: Some(BabelOptions {
                    plugins: Some(plugins),
                    extra: Map::new(),
                }),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }
}

/// Anything that owns a Babel plugin list
///
/// `plugins_mut` always hands back the same underlying list, creating it if
/// needed, so edits made through it are visible on the target.
pub trait PluginTarget {
    /// The current plugins, empty when none are configured
    fn plugins(&self) -> &[PluginConfig];

    /// The plugin list itself, attached to the target if it was absent
    fn plugins_mut(&mut self) -> &mut Vec<PluginConfig>;
}

impl PluginTarget for Vec<PluginConfig> {
    fn plugins(&self) -> &[PluginConfig] {
        self
    }

    fn plugins_mut(&mut self) -> &mut Vec<PluginConfig> {
        self
    }
}

impl PluginTarget for ConfigurationTarget {
    fn plugins(&self) -> &[PluginConfig] {
        self.options
            .as_ref()
            .and_then(|options| options.babel.as_ref())
            .and_then(|babel| babel.plugins.as_deref())
            .unwrap_or(&[])
    }

    fn plugins_mut(&mut self) -> &mut Vec<PluginConfig> {
        self.options
            .get_or_insert_with(TargetOptions::default)
            .babel
            .get_or_insert_with(BabelOptions::default)
            .plugins
            .get_or_insert_with(Vec::new)
    }
}
