use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::MappingTarget;
use crate::errors::DeclarationError;

/// Specifier (or specifier prefix) to target.
///
/// Entries are kept and composed in sorted key order, not declaration
/// order. When two keys of one declaration resolve to the same URL, the
/// one that sorts first is the `existing` side of the conflict.
pub type PackageMap = BTreeMap<String, MappingTarget>;

/// An import map: top-level `imports` plus per-scope overrides.
///
/// The same shape is used for a raw declaration and for the composed
/// result. In a composed map every scope key is an absolute URL and every
/// package key is either a bare specifier or an absolute URL prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMap {
    #[serde(default)]
    pub imports: PackageMap,
    #[serde(default)]
    pub scopes: BTreeMap<String, PackageMap>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declaration from JSON text.
    pub fn from_json(source: &str) -> Result<Self, DeclarationError> {
        serde_json::from_str(source).map_err(|err| DeclarationError::from_json(&err, source))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.scopes.values().all(BTreeMap::is_empty)
    }

    /// Add a top-level entry, builder style.
    pub fn with_import(mut self, key: impl Into<String>, target: impl Into<MappingTarget>) -> Self {
        self.imports.insert(key.into(), target.into());
        self
    }

    /// Add an entry to the scope rooted at `scope`, builder style.
    pub fn with_scoped(
        mut self,
        scope: impl Into<String>,
        key: impl Into<String>,
        target: impl Into<MappingTarget>,
    ) -> Self {
        self.scopes
            .entry(scope.into())
            .or_default()
            .insert(key.into(), target.into());
        self
    }

    /// Every specifier key in the map, top-level first, deduplicated.
    pub fn specifiers(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.imports
            .keys()
            .chain(self.scopes.values().flat_map(BTreeMap::keys))
            .map(String::as_str)
            .filter(|key| seen.insert(*key))
            .collect()
    }
}
