//! Package-name extraction from module paths

use regex::Regex;
use std::sync::LazyLock;

/// A `node_modules` directory bounded by separators on both sides
static NODE_MODULES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]node_modules[\\/]").expect("valid node_modules pattern"));

/// Leading `@scope/pkg` or bare `pkg` of a `require`-style sub-path
static PACKAGE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((@[^\\/]+[\\/])?[^\\/]*)").expect("valid package pattern"));

/// Whether a plugin string refers to a filesystem path
pub fn is_path(name: &str) -> bool {
    name.contains(['/', '\\'])
}

/// Returns the package name that implements the module at `module_path`.
///
/// Only the innermost `node_modules` directory counts, and any entry-point
/// sub-path after the package name is dropped:
///
/// ```
/// use babel_plugin_helpers::names::find_package_name;
///
/// assert_eq!(find_package_name("/app/node_modules/@scope/pkg/lib/index.js"), "@scope/pkg");
/// assert_eq!(find_package_name("/app/lib/plugin.js"), "/app/lib/plugin.js");
/// ```
pub fn find_package_name(module_path: &str) -> String {
    let Some(start) = last_node_modules_end(module_path) else {
        return module_path.to_string();
    };

    let package_with_entry_point = &module_path[start..];
    let package_name = PACKAGE_NAME_REGEX
        .captures(package_with_entry_point)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());

    // Windows-style scoped names compare equal to their POSIX form
    package_name.replacen('\\', "/", 1)
}

/// Byte offset just past the last `node_modules` segment, if any.
///
/// Matches may share a separator (`/node_modules/node_modules/`), so the
/// search restarts one byte after each match rather than after its end.
fn last_node_modules_end(path: &str) -> Option<usize> {
    let mut found = None;
    let mut from = 0;
    while let Some(m) = NODE_MODULES_REGEX.find_at(path, from) {
        found = Some(m.end());
        from = m.start() + 1;
    }
    found
}
