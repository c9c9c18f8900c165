//! Shared test helpers for integration tests

use babel_plugin_helpers::{resolve_plugin_name, PluginConfig};

/// Build a plugin list of bare module entries
#[allow(dead_code)]
pub fn plugin_list(names: &[&str]) -> Vec<PluginConfig> {
    names.iter().map(|name| PluginConfig::named(*name)).collect()
}

/// Canonical names of every entry, with `None` for unresolvable ones
#[allow(dead_code)]
pub fn resolved_names(plugins: &[PluginConfig]) -> Vec<Option<String>> {
    plugins.iter().map(resolve_plugin_name).collect()
}

/// Canonical names of every entry, unresolvable ones rendered as `"?"`
#[allow(dead_code)]
pub fn resolved_name_strings(plugins: &[PluginConfig]) -> Vec<String> {
    resolved_names(plugins)
        .into_iter()
        .map(|name| name.unwrap_or_else(|| "?".to_string()))
        .collect()
}
