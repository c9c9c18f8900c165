//! Canonical Babel plugin names
//!
//! Babel accepts several spellings for the same plugin (`foo`,
//! `babel-plugin-foo`, `@babel/foo`, a path into `node_modules`, ...). The
//! functions here reduce any of them to the single package name Babel itself
//! would load, following its documented name-normalization rules:
//! <https://babeljs.io/docs/en/options#name-normalization>.
//!
//! Normalization is idempotent: feeding a canonical name back in returns it
//! unchanged.

mod package;

pub use package::{find_package_name, is_path};

use crate::config::{BabelPlugin, PluginConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix that opts a module reference out of normalization
pub const MODULE_PREFIX: &str = "module:";

/// Splits `@scope/rest` (either separator) into its scope and remainder
static SCOPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(@[^\\/]+)(?:[\\/](.*))?$").expect("valid scope pattern"));

/// `babel-plugin` as a standalone word, with ASCII word boundaries
static BABEL_PLUGIN_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)babel-plugin(?-u:\b)").expect("valid babel-plugin pattern")
});

/// A raw plugin name split at its scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopedName<'a> {
    /// No `@scope` prefix
    Unscoped(&'a str),
    /// `@scope` followed by a (possibly empty) remainder
    Scoped { scope: &'a str, name: &'a str },
}

impl<'a> ScopedName<'a> {
    /// Split `raw` into scope and remainder
    pub fn parse(raw: &'a str) -> Self {
        if !raw.starts_with('@') {
            return ScopedName::Unscoped(raw);
        }
        match SCOPE_REGEX.captures(raw) {
            Some(caps) => ScopedName::Scoped {
                scope: caps.get(1).map_or("", |m| m.as_str()),
                name: caps.get(2).map_or("", |m| m.as_str()),
            },
            None => ScopedName::Unscoped(raw),
        }
    }

    /// The remainder after the scope, or the whole name when unscoped
    pub fn name(&self) -> &'a str {
        match *self {
            ScopedName::Unscoped(name) | ScopedName::Scoped { name, .. } => name,
        }
    }

    /// The `@scope` prefix, if present
    pub fn scope(&self) -> Option<&'a str> {
        match *self {
            ScopedName::Unscoped(_) => None,
            ScopedName::Scoped { scope, .. } => Some(scope),
        }
    }
}

/// Determine the canonical name of the plugin a configuration entry refers to.
///
/// Returns `None` when no name can be determined, e.g. for an anonymous
/// inline implementation.
pub fn resolve_plugin_name(config: &PluginConfig) -> Option<String> {
    let resolved = match config.plugin() {
        BabelPlugin::Module(name) if is_path(name) => Some(find_package_name(name)),
        BabelPlugin::Module(name) => Some(normalize_plugin_name(name)),
        BabelPlugin::Inline(inline) => inline
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(normalize_plugin_name),
    };
    tracing::trace!(?resolved, "resolved plugin name");
    resolved
}

/// Normalize a raw plugin name the way Babel does before loading it.
///
/// ```
/// use babel_plugin_helpers::names::normalize_plugin_name;
///
/// assert_eq!(normalize_plugin_name("foo"), "babel-plugin-foo");
/// assert_eq!(normalize_plugin_name("@babel/foo"), "@babel/plugin-foo");
/// assert_eq!(normalize_plugin_name("@scope/foo"), "@scope/babel-plugin-foo");
/// assert_eq!(normalize_plugin_name("module:foo/bar"), "foo/bar");
/// ```
pub fn normalize_plugin_name(raw_name: &str) -> String {
    if let Some(module) = raw_name.strip_prefix(MODULE_PREFIX) {
        return module.to_string();
    }

    let scoped = ScopedName::parse(raw_name);
    if is_canonical(&scoped) {
        return raw_name.to_string();
    }

    match scoped {
        ScopedName::Scoped { scope: "@babel", name } => format!("@babel/plugin-{}", name),
        ScopedName::Scoped { scope, name: "" } => format!("{}/babel-plugin", scope),
        ScopedName::Scoped { scope, name } => format!("{}/babel-plugin-{}", scope, name),
        ScopedName::Unscoped(name) => format!("babel-plugin-{}", name),
    }
}

// Order matters: each check assumes the ones before it failed.
fn is_canonical(scoped: &ScopedName<'_>) -> bool {
    let name = scoped.name();
    if is_path(name) {
        return true;
    }
    match scoped.scope() {
        None => name.starts_with("babel-plugin-"),
        Some("@babel") if name.starts_with("plugin-") => true,
        Some(_) => BABEL_PLUGIN_WORD_REGEX.is_match(name),
    }
}
