//! Constrained insertion into an ordered plugin list
//!
//! A new plugin may be required to appear after some existing plugins and
//! before others. The `after` names give a lower bound on the insertion
//! index and the `before` names an upper bound; either bound may be absent.
//! When both are present and cross, no position satisfies the request and
//! insertion fails with [`Error::PlacementConflict`].

use crate::config::PluginConfig;
use crate::error::{Error, Result};
use crate::names::resolve_plugin_name;
use serde::{Deserialize, Serialize};

/// Constraints on where a plugin may be inserted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPluginOptions {
    /// Plugins the new one must appear *before*
    #[serde(default)]
    pub before: Vec<String>,
    /// Plugins the new one must appear *after*
    #[serde(default)]
    pub after: Vec<String>,
}

impl AddPluginOptions {
    /// No constraints: the plugin is appended
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the plugin to appear before `name`
    pub fn before(mut self, name: impl Into<String>) -> Self {
        self.before.push(name.into());
        self
    }

    /// Require the plugin to appear after `name`
    pub fn after(mut self, name: impl Into<String>) -> Self {
        self.after.push(name.into());
        self
    }

    /// Whether neither `before` nor `after` names anything
    pub fn is_unconstrained(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }
}

/// The range of indices a new plugin may occupy
///
/// `None` on either side means that side is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementBounds {
    /// Smallest permitted index (one past the last `after` match)
    pub earliest: Option<usize>,
    /// Largest permitted index (the first `before` match)
    pub latest: Option<usize>,
}

impl PlacementBounds {
    /// Compute the bounds `options` imposes on `plugins`.
    ///
    /// Names that are empty or not present in the list impose nothing.
    pub fn compute(plugins: &[PluginConfig], options: &AddPluginOptions) -> Self {
        let earliest = find_plugin_indices(plugins, &options.after)
            .max()
            .map(|index| index + 1);
        let latest = find_plugin_indices(plugins, &options.before).min();
        PlacementBounds { earliest, latest }
    }

    /// Whether at least one index satisfies both bounds
    pub fn is_satisfiable(&self) -> bool {
        match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => earliest <= latest,
            _ => true,
        }
    }

    /// Index to insert at in a list of length `len`, or `None` on conflict.
    ///
    /// The upper bound wins when present so the plugin lands as late as
    /// `before` allows; otherwise it goes right after its `after` plugins,
    /// and with no constraints at all it is appended.
    pub fn target_index(&self, len: usize) -> Option<usize> {
        if !self.is_satisfiable() {
            return None;
        }
        Some(self.latest.or(self.earliest).unwrap_or(len))
    }
}

/// Index of the first entry whose resolved name equals `name` exactly.
///
/// `name` is compared as given; it is not normalized first.
pub fn find_plugin_index(plugins: &[PluginConfig], name: &str) -> Option<usize> {
    plugins
        .iter()
        .position(|entry| resolve_plugin_name(entry).as_deref() == Some(name))
}

/// Whether any entry resolves to `name`
pub fn contains_plugin(plugins: &[PluginConfig], name: &str) -> bool {
    find_plugin_index(plugins, name).is_some()
}

fn find_plugin_indices<'a>(
    plugins: &'a [PluginConfig],
    names: &'a [String],
) -> impl Iterator<Item = usize> + 'a {
    names
        .iter()
        .filter(|name| !name.is_empty())
        .filter_map(move |name| find_plugin_index(plugins, name))
}

/// Insert `entry` into `plugins` honoring `options`, returning its index.
///
/// Existing entries are never replaced or removed; use [`contains_plugin`]
/// first to avoid duplicates.
pub fn insert_plugin(
    plugins: &mut Vec<PluginConfig>,
    entry: PluginConfig,
    options: &AddPluginOptions,
) -> Result<usize> {
    if options.is_unconstrained() {
        let index = plugins.len();
        plugins.push(entry);
        tracing::trace!(index, "no placement constraints, appended plugin");
        return Ok(index);
    }

    let bounds = PlacementBounds::compute(plugins, options);
    tracing::debug!(
        earliest = ?bounds.earliest,
        latest = ?bounds.latest,
        len = plugins.len(),
        "computed placement bounds"
    );

    let Some(index) = bounds.target_index(plugins.len()) else {
        let plugin = resolve_plugin_name(&entry);
        tracing::warn!(?plugin, ?options, "unsatisfiable placement constraints");
        return Err(Error::placement_conflict(plugin));
    };

    plugins.insert(index, entry);
    tracing::debug!(index, "inserted plugin");
    Ok(index)
}
