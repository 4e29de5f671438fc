use crate::address;
use crate::diagnostics::UnresolvableTarget;
use crate::errors::{ImportMapError, OverrideConflict};
use crate::map::{self, ImportMap, Resolution};

/// An accumulated import map together with the base URL new declarations
/// are resolved against.
///
/// Compositions go through `&mut self`, so a single `Context` is the one
/// writer for its map. Lookups only need `&self`.
#[derive(Debug, Clone)]
pub struct Context {
    base: String,
    map: ImportMap,
    warnings: Vec<UnresolvableTarget>,
}

impl Context {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            map: ImportMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Change the base used by later compositions. Entries already composed
    /// keep their resolved form.
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = base.into();
    }

    pub fn map(&self) -> &ImportMap {
        &self.map
    }

    /// Dropped-entry diagnostics from every successful composition so far.
    pub fn warnings(&self) -> &[UnresolvableTarget] {
        &self.warnings
    }

    /// Fold `declaration` into the held map. On conflict the held map is
    /// left as it was.
    pub fn add_map(&mut self, declaration: &ImportMap) -> Result<(), OverrideConflict> {
        let composed = map::compose(declaration, &self.base, &self.map)?;
        self.map = composed.map;
        self.warnings.extend(composed.warnings);
        Ok(())
    }

    pub fn add_json(&mut self, source: &str) -> Result<(), ImportMapError> {
        let declaration = ImportMap::from_json(source)?;
        self.add_map(&declaration)?;
        Ok(())
    }

    /// Resolve `specifier` as imported by the module at `parent`, or by the
    /// base URL when no parent is given.
    pub fn resolve(&self, specifier: &str, parent: Option<&str>) -> Resolution {
        let parent = parent.unwrap_or(&self.base);
        crate::resolve(&self.map, specifier, parent)
    }

    /// Resolve a relative URL against the base, without consulting the map.
    pub fn resolve_url(&self, input: &str) -> Option<String> {
        address::resolve_url(input, &self.base)
    }

    pub fn clear(&mut self) {
        self.map = ImportMap::new();
        self.warnings.clear();
    }
}
