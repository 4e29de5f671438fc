use importmap::map::compose;
use importmap::{ImportMap, MappingTarget, OverrideConflict, compose_import_map};

const BASE: &str = "http://example.com/app/";

fn declaration(json: &str) -> ImportMap {
    ImportMap::from_json(json).expect("declaration should parse")
}

#[test]
fn conflicting_bare_specifier_is_rejected() {
    let first = compose_import_map(
        &declaration(r#"{ "imports": { "a": "http://cdn/a1.js" } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("first map composes");

    let err = compose_import_map(
        &declaration(r#"{ "imports": { "a": "http://cdn/a2.js" } }"#),
        BASE,
        &first,
    )
    .expect_err("second map redefines a");

    assert_eq!(
        err,
        OverrideConflict {
            key: "a".into(),
            scope: None,
            existing: MappingTarget::from("http://cdn/a1.js"),
            attempted: MappingTarget::from("http://cdn/a2.js"),
        }
    );
}

#[test]
fn identical_redefinition_is_accepted() {
    let decl = declaration(r#"{ "imports": { "a": "./a.js", "b/": "./b/" }, "scopes": { "./s/": { "a": null } } }"#);
    let once = compose_import_map(&decl, BASE, &ImportMap::new()).expect("first composition");
    let twice = compose_import_map(&decl, BASE, &once).expect("same declaration again");
    assert_eq!(once, twice);
}

#[test]
fn conflict_leaves_accumulated_map_untouched() {
    let accumulated = compose_import_map(
        &declaration(r#"{ "imports": { "a": "./a.js" } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("first map composes");
    let snapshot = accumulated.clone();

    let result = compose_import_map(
        &declaration(r#"{ "imports": { "z": "./z.js", "a": "./other.js" } }"#),
        BASE,
        &accumulated,
    );

    assert!(result.is_err());
    assert_eq!(accumulated, snapshot);
}

#[test]
fn keys_resolving_to_same_url_conflict_within_one_declaration() {
    let err = compose_import_map(
        &declaration(r#"{ "imports": { "./x.js": "./one.js", "http://example.com/app/x.js": "./two.js" } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect_err("both keys resolve to the same URL");
    assert_eq!(err.key, "http://example.com/app/x.js");
}

#[test]
fn same_url_keys_are_composed_in_sorted_key_order() {
    let err = compose_import_map(
        &declaration(r#"{ "imports": { "http://example.com/app/x.js": "./two.js", "./x.js": "./one.js" } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect_err("both keys resolve to the same URL");
    assert_eq!(err.existing, MappingTarget::from("http://example.com/app/one.js"));
    assert_eq!(err.attempted, MappingTarget::from("http://example.com/app/two.js"));
}

#[test]
fn scope_conflicts_name_their_scope() {
    let first = compose_import_map(
        &declaration(r#"{ "scopes": { "./legacy/": { "a": "./a1.js" } } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("first map composes");

    let err = compose_import_map(
        &declaration(r#"{ "scopes": { "http://example.com/app/legacy/": { "a": "./a2.js" } } }"#),
        BASE,
        &first,
    )
    .expect_err("same scope, different target");

    assert_eq!(err.scope.as_deref(), Some("http://example.com/app/legacy/"));
    assert!(err.to_string().ends_with("in scope http://example.com/app/legacy/"));
}

#[test]
fn later_maps_can_target_earlier_specifiers() {
    let first = compose_import_map(
        &declaration(r#"{ "imports": { "lodash": "https://cdn/lodash@4/lodash.js", "lodash/": "https://cdn/lodash@4/" } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("first map composes");

    let second = compose_import_map(
        &declaration(r#"{ "imports": { "underscore": "lodash", "fp": "lodash/fp.js" } }"#),
        BASE,
        &first,
    )
    .expect("second map composes");

    assert_eq!(second.imports["underscore"].address(), Some("https://cdn/lodash@4/lodash.js"));
    assert_eq!(second.imports["fp"].address(), Some("https://cdn/lodash@4/fp.js"));
}

#[test]
fn unresolvable_targets_are_dropped_not_fatal() {
    let composed = compose(
        &declaration(r#"{ "imports": { "a": "nowhere", "b": "./b.js" }, "scopes": { "./s/": { "c": "also-nowhere" } } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("drops are not conflicts");

    assert_eq!(composed.map.imports.len(), 1);
    assert!(composed.map.scopes["http://example.com/app/s/"].is_empty());
    let dropped: Vec<_> = composed.warnings.iter().map(|w| w.key.as_str()).collect();
    assert_eq!(dropped, vec!["a", "c"]);
    assert_eq!(
        composed.warnings[1].scope.as_deref(),
        Some("http://example.com/app/s/")
    );
}

#[test]
fn target_blocked_by_parent_is_dropped() {
    let first = compose_import_map(
        &declaration(r#"{ "imports": { "legacy": null } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("first map composes");

    let composed = compose(&declaration(r#"{ "imports": { "alias": "legacy" } }"#), BASE, &first)
        .expect("no conflict");
    assert!(!composed.map.imports.contains_key("alias"));
    assert_eq!(composed.warnings.len(), 1);
}

#[test]
fn scope_keys_are_resolved_leniently() {
    let composed = compose_import_map(
        &declaration(r#"{ "scopes": { "vendor/": { "a": "/a.js" }, "//cdn.example/": { "b": "./b.js" } } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("composes");

    let roots: Vec<_> = composed.scopes.keys().map(String::as_str).collect();
    assert_eq!(roots, vec!["http://cdn.example/", "http://example.com/app/vendor/"]);
    assert_eq!(
        composed.scopes["http://example.com/app/vendor/"]["a"].address(),
        Some("http://example.com/a.js")
    );
}

#[test]
fn composed_scopes_do_not_alias_input() {
    let first = compose_import_map(
        &declaration(r#"{ "scopes": { "./s/": { "a": "./a.js" } } }"#),
        BASE,
        &ImportMap::new(),
    )
    .expect("first map composes");
    let second = compose_import_map(
        &declaration(r#"{ "scopes": { "./s/": { "b": "./b.js" } } }"#),
        BASE,
        &first,
    )
    .expect("second map composes");

    assert_eq!(first.scopes["http://example.com/app/s/"].len(), 1);
    assert_eq!(second.scopes["http://example.com/app/s/"].len(), 2);
}

#[test]
fn unresolvable_target_cannot_redefine_a_mapped_key() {
    let accumulated = compose_import_map(
        &declaration(r#"{ "imports": { "a": "http://x/a.js" } }"#),
        "http://x/",
        &ImportMap::new(),
    )
    .expect("first map composes");

    let err = compose_import_map(
        &declaration(r#"{ "imports": { "a": "missing" } }"#),
        "http://x/",
        &accumulated,
    )
    .expect_err("a is already mapped");

    assert_eq!(
        err,
        OverrideConflict {
            key: "a".into(),
            scope: None,
            existing: MappingTarget::from("http://x/a.js"),
            attempted: MappingTarget::from("missing"),
        }
    );
    assert_eq!(
        err.to_string(),
        "rejected map override \"a\" from http://x/a.js to missing"
    );
}
