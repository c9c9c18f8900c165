//! babel-plugin-helpers: programmatic edits to a Babel plugin pipeline
//!
//! Tools that configure another build's Babel setup need two things: a way to
//! recognize a plugin however it happens to be spelled, and a way to insert a
//! new plugin at a position that respects ordering requirements relative to
//! plugins already present.
//!
//! # Quick Start
//!
//! ```
//! use babel_plugin_helpers::{add_plugin, has_plugin, AddPluginOptions, ConfigurationTarget, PluginConfig};
//!
//! fn main() -> babel_plugin_helpers::Result<()> {
//!     let mut app = ConfigurationTarget::with_plugins(vec![
//!         PluginConfig::named("@babel/plugin-proposal-decorators"),
//!         PluginConfig::named("@babel/plugin-proposal-class-properties"),
//!     ]);
//!
//!     let options = AddPluginOptions::new()
//!         .after("@babel/plugin-proposal-decorators")
//!         .before("@babel/plugin-proposal-class-properties");
//!     add_plugin(&mut app, PluginConfig::named("my-plugin"), &options)?;
//!
//!     assert!(has_plugin(&app, "babel-plugin-my-plugin"));
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`names`] | Canonical plugin names and package-name extraction from paths |
//! | [`placement`] | Index lookup and constrained insertion |
//! | [`config`] | Plugin entry model, host objects, and JSON documents |

pub mod config;
pub mod names;
pub mod placement;

mod error;

pub use config::{
    BabelPlugin, ConfigDocument, ConfigurationTarget, InlinePlugin, PluginConfig, PluginTarget,
    PluginTuple,
};
pub use error::{Error, Result, UNRESOLVABLE_PLUGIN_NAME};
pub use names::{normalize_plugin_name, resolve_plugin_name};
pub use placement::{AddPluginOptions, PlacementBounds};

/// babel-plugin-helpers version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Locate the existing configuration, if any, for the plugin called `name`.
///
/// `target` may be a raw plugin list or a host object; `name` is compared
/// against each entry's canonical name as given.
pub fn find_plugin<'a, T>(target: &'a T, name: &str) -> Option<&'a PluginConfig>
where
    T: PluginTarget + ?Sized,
{
    let plugins = target.plugins();
    placement::find_plugin_index(plugins, name).map(|index| &plugins[index])
}

/// Whether the plugin called `name` is already configured on `target`
pub fn has_plugin<T>(target: &T, name: &str) -> bool
where
    T: PluginTarget + ?Sized,
{
    find_plugin(target, name).is_some()
}

/// Add `plugin` to `target`'s configuration, honoring placement `options`.
///
/// The plugin list is created on the target if it did not exist yet. Fails
/// with [`Error::PlacementConflict`] when the constraints cannot be satisfied,
/// leaving the list untouched.
pub fn add_plugin<T>(target: &mut T, plugin: PluginConfig, options: &AddPluginOptions) -> Result<()>
where
    T: PluginTarget + ?Sized,
{
    placement::insert_plugin(target.plugins_mut(), plugin, options).map(|_| ())
}
