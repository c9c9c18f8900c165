//! Integration tests for constrained plugin insertion

mod common;
use babel_plugin_helpers::placement::{contains_plugin, find_plugin_index, insert_plugin};
use babel_plugin_helpers::{
    add_plugin, find_plugin, has_plugin, AddPluginOptions, BabelPlugin, ConfigurationTarget,
    Error, PluginConfig, PluginTarget,
};
use common::{plugin_list, resolved_name_strings};
use pretty_assertions::assert_eq;

const A: &str = "babel-plugin-a";
const B: &str = "babel-plugin-b";
const C: &str = "babel-plugin-c";
const NEW: &str = "babel-plugin-new";

mod positions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_constraints_appends() {
        let mut plugins = plugin_list(&["a", "b"]);
        add_plugin(&mut plugins, "new".into(), &AddPluginOptions::new()).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, B, NEW]);
    }

    #[test]
    fn test_after_only() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        add_plugin(&mut plugins, "new".into(), &AddPluginOptions::new().after(A)).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, NEW, B, C]);
    }

    #[test]
    fn test_before_only() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        add_plugin(&mut plugins, "new".into(), &AddPluginOptions::new().before(B)).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, NEW, B, C]);
    }

    #[test]
    fn test_after_last_element() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        add_plugin(&mut plugins, "new".into(), &AddPluginOptions::new().after(C)).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, B, C, NEW]);
    }

    #[test]
    fn test_before_first_element() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        add_plugin(&mut plugins, "new".into(), &AddPluginOptions::new().before(A)).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [NEW, A, B, C]);
    }

    #[test]
    fn test_before_and_after_same_neighbors() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        let options = AddPluginOptions::new().after(A).before(B);
        add_plugin(&mut plugins, "new".into(), &options).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, NEW, B, C]);
    }

    #[test]
    fn test_multiple_after_uses_latest_match() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        let options = AddPluginOptions::new().after(B).after(A);
        add_plugin(&mut plugins, "new".into(), &options).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, B, NEW, C]);
    }

    #[test]
    fn test_multiple_before_uses_earliest_match() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        let options = AddPluginOptions::new().before(C).before(B);
        add_plugin(&mut plugins, "new".into(), &options).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, NEW, B, C]);
    }

    #[test]
    fn test_unknown_constraint_names_are_ignored() {
        let mut plugins = plugin_list(&["a", "b"]);
        let options = AddPluginOptions::new()
            .after("babel-plugin-missing")
            .before("")
            .after("");
        add_plugin(&mut plugins, "new".into(), &options).unwrap();
        assert_eq!(resolved_name_strings(&plugins), [A, B, NEW]);
    }

    #[test]
    fn test_insert_into_empty_list() {
        let mut plugins = Vec::new();
        let index = insert_plugin(&mut plugins, "new".into(), &AddPluginOptions::new().before(A))
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(resolved_name_strings(&plugins), [NEW]);
    }

    #[test]
    fn test_placement_is_deterministic() {
        let options = AddPluginOptions::new().after(A).before(C);
        let indices: Vec<usize> = (0..5)
            .map(|_| {
                let mut plugins = plugin_list(&["a", "b", "c"]);
                insert_plugin(&mut plugins, "new".into(), &options).unwrap()
            })
            .collect();
        assert_eq!(indices, vec![2; 5]);
    }
}

mod conflicts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_after_last_before_first() {
        let mut plugins = plugin_list(&["a", "b", "c"]);
        let options = AddPluginOptions::new().after(C).before(A);
        let err = add_plugin(&mut plugins, "new".into(), &options).unwrap_err();
        match err {
            Error::PlacementConflict { plugin } => assert_eq!(plugin, NEW),
            other => panic!("expected placement conflict, got {:?}", other),
        }
        assert_eq!(resolved_name_strings(&plugins), [A, B, C]);
    }

    #[test]
    fn test_conflict_names_tuple_entry() {
        let mut plugins = plugin_list(&["a", "b"]);
        let entry = PluginConfig::with_options(BabelPlugin::module("@babel/x"), serde_json::json!({}));
        let options = AddPluginOptions::new().after(B).before(A);
        let err = add_plugin(&mut plugins, entry, &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to satisfy placement constraints for Babel plugin @babel/x"
        );
    }

    #[test]
    fn test_self_referential_constraints_conflict() {
        let mut plugins = plugin_list(&["a"]);
        let options = AddPluginOptions::new().after(A).before(A);
        assert!(add_plugin(&mut plugins, "new".into(), &options).is_err());
    }
}

mod lookup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_has_plugin_matches_find_plugin() {
        let plugins = plugin_list(&["a", "b"]);
        for name in [A, B, C, "a", ""] {
            assert_eq!(has_plugin(&plugins, name), find_plugin(&plugins, name).is_some());
            assert_eq!(contains_plugin(&plugins, name), has_plugin(&plugins, name));
        }
    }

    #[test]
    fn test_find_plugin_returns_configured_entry() {
        let entry = PluginConfig::with_options(BabelPlugin::module("b"), serde_json::json!({ "x": 1 }));
        let target = ConfigurationTarget::with_plugins(vec![PluginConfig::named("a"), entry.clone()]);
        assert_eq!(find_plugin(&target, B), Some(&entry));
    }

    #[test]
    fn test_unnamed_inline_entry_is_skipped() {
        let plugins = vec![
            PluginConfig::from(BabelPlugin::inline(None)),
            PluginConfig::named("a"),
        ];
        assert_eq!(find_plugin_index(&plugins, A), Some(1));
    }

    #[test]
    fn test_add_is_visible_through_target() {
        let mut target = ConfigurationTarget::new();
        add_plugin(&mut target, "a".into(), &AddPluginOptions::new()).unwrap();
        add_plugin(&mut target, "b".into(), &AddPluginOptions::new().before(A)).unwrap();
        assert_eq!(resolved_name_strings(target.plugins()), [B, A]);
    }
}
