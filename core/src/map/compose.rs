use std::collections::btree_map::Entry;

use tracing::{debug, warn};

use super::resolve::{Resolution, resolve};
use super::{ImportMap, MappingTarget, PackageMap};
use crate::address;
use crate::diagnostics::UnresolvableTarget;
use crate::errors::OverrideConflict;

/// Result of folding one declaration into an accumulated map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    pub map: ImportMap,
    /// Entries dropped because their target did not resolve.
    pub warnings: Vec<UnresolvableTarget>,
}

/// Fold `declaration`, whose URLs are relative to `base`, into `parent`.
///
/// Keys and targets are resolved to absolute form. Bare targets are looked
/// up in `parent`, so a later map can refer to specifiers an earlier one
/// defines. A key that is already mapped to a different target rejects the
/// whole declaration; `parent` is never modified.
pub fn compose(
    declaration: &ImportMap,
    base: &str,
    parent: &ImportMap,
) -> Result<Composed, OverrideConflict> {
    let mut out = parent.clone();
    let mut composer = Composer {
        base,
        parent,
        warnings: Vec::new(),
    };

    composer.compose_packages(&declaration.imports, &mut out.imports, None)?;

    for (scope, packages) in &declaration.scopes {
        let scope_root = address::resolve_url_or_relative(scope, base);
        let bucket = out.scopes.entry(scope_root.clone()).or_default();
        composer.compose_packages(packages, bucket, Some(scope_root.as_str()))?;
    }

    debug!(
        base,
        imports = out.imports.len(),
        scopes = out.scopes.len(),
        dropped = composer.warnings.len(),
        "composed import map"
    );

    Ok(Composed {
        map: out,
        warnings: composer.warnings,
    })
}

struct Composer<'a> {
    base: &'a str,
    parent: &'a ImportMap,
    warnings: Vec<UnresolvableTarget>,
}

impl Composer<'_> {
    fn compose_packages(
        &mut self,
        packages: &PackageMap,
        out: &mut PackageMap,
        scope: Option<&str>,
    ) -> Result<(), OverrideConflict> {
        for (key, value) in packages {
            let resolved_key = address::resolve_url(key, self.base).unwrap_or_else(|| key.clone());
            let target = match value {
                MappingTarget::Blocked => Some(MappingTarget::Blocked),
                MappingTarget::Address(raw) => self.resolve_target(raw).map(MappingTarget::Address),
            };

            match (out.entry(resolved_key), target) {
                (Entry::Occupied(entry), Some(target)) if *entry.get() == target => {}
                // An unresolvable target still counts as a redefinition.
                (Entry::Occupied(entry), target) => {
                    return Err(OverrideConflict {
                        key: entry.key().clone(),
                        scope: scope.map(str::to_string),
                        existing: entry.get().clone(),
                        attempted: target.unwrap_or_else(|| value.clone()),
                    });
                }
                (Entry::Vacant(slot), Some(target)) => {
                    slot.insert(target);
                }
                (Entry::Vacant(_), None) => {
                    warn!(key = %key, target = %value, scope, "mapping does not resolve");
                    self.warnings.push(UnresolvableTarget {
                        key: key.clone(),
                        target: value.to_string(),
                        scope: scope.map(str::to_string),
                    });
                }
            }
        }
        Ok(())
    }

    fn resolve_target(&self, raw: &str) -> Option<String> {
        if let Some(url) = address::resolve_url(raw, self.base) {
            return Some(url);
        }
        match resolve(self.parent, raw, self.base) {
            Resolution::Resolved(mapped) => address::resolve_url(&mapped, self.base),
            Resolution::Blocked | Resolution::Unmapped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://x/app/";

    #[test]
    fn keys_and_targets_become_absolute() {
        let declaration = ImportMap::new()
            .with_import("./local/", "./vendor/local/")
            .with_import("pkg", "/pkg/index.js");
        let composed = compose(&declaration, BASE, &ImportMap::new()).expect("no conflict");

        assert_eq!(
            composed.map.imports["http://x/app/local/"].address(),
            Some("http://x/app/vendor/local/")
        );
        assert_eq!(
            composed.map.imports["pkg"].address(),
            Some("http://x/pkg/index.js")
        );
    }

    #[test]
    fn bare_target_resolves_through_parent() {
        let parent = ImportMap::new().with_import("lodash", "http://cdn/lodash.js");
        let declaration = ImportMap::new().with_import("underscore", "lodash");
        let composed = compose(&declaration, BASE, &parent).expect("no conflict");

        assert_eq!(
            composed.map.imports["underscore"].address(),
            Some("http://cdn/lodash.js")
        );
        assert!(composed.warnings.is_empty());
    }

    #[test]
    fn unresolvable_target_is_dropped_with_warning() {
        let declaration = ImportMap::new()
            .with_import("a", "missing")
            .with_import("b", "./b.js");
        let composed = compose(&declaration, BASE, &ImportMap::new()).expect("no conflict");

        assert!(!composed.map.imports.contains_key("a"));
        assert!(composed.map.imports.contains_key("b"));
        assert_eq!(
            composed.warnings,
            vec![UnresolvableTarget {
                key: "a".into(),
                target: "missing".into(),
                scope: None,
            }]
        );
    }

    #[test]
    fn unresolvable_redefinition_conflicts() {
        let parent = ImportMap::new().with_import("a", "http://x/a.js");
        let declaration = ImportMap::new().with_import("a", "missing");
        let err = compose(&declaration, BASE, &parent).expect_err("a is already mapped");

        assert_eq!(err.existing, MappingTarget::from("http://x/a.js"));
        assert_eq!(err.attempted, MappingTarget::from("missing"));
    }

    #[test]
    fn conflicts_are_per_bucket() {
        let parent = ImportMap::new().with_import("a", "http://x/a.js");
        let declaration = ImportMap::new().with_scoped("./sub/", "a", "./other-a.js");
        let composed = compose(&declaration, BASE, &parent).expect("scopes do not clash with imports");

        assert_eq!(
            composed.map.scopes["http://x/app/sub/"]["a"].address(),
            Some("http://x/app/other-a.js")
        );
    }

    #[test]
    fn blocked_over_address_conflicts() {
        let parent = ImportMap::new().with_import("a", "http://x/a.js");
        let declaration = ImportMap::new().with_import("a", MappingTarget::Blocked);
        let err = compose(&declaration, BASE, &parent).expect_err("null differs from a URL");

        assert_eq!(err.existing, MappingTarget::from("http://x/a.js"));
        assert_eq!(err.attempted, MappingTarget::Blocked);
        assert_eq!(
            err.to_string(),
            "rejected map override \"a\" from http://x/a.js to null"
        );
    }
}
