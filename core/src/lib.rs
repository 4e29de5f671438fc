//! Import map resolution.
//!
//! Three layers, each building on the previous one:
//!
//! * [`address`] turns relative, absolute and protocol-relative strings into
//!   absolute URLs against a base.
//! * [`map::compose`] folds an import map declaration into an accumulated
//!   map, resolving every key and target and rejecting conflicting
//!   redefinitions.
//! * [`map::resolve`] finds the most specific rule for a specifier as seen
//!   from an importing module.
//!
//! Nothing here performs I/O or keeps global state.

pub mod address;
pub mod context;
pub mod diagnostics;
pub mod errors;
pub mod map;

pub use address::{document_base_url, is_url, resolve_url, resolve_url_or_relative};
pub use context::Context;
pub use diagnostics::UnresolvableTarget;
pub use errors::{DeclarationError, ImportMapError, OverrideConflict};
pub use map::{ImportMap, MappingTarget, PackageMap, Resolution};

/// Fold `declaration` into `accumulated`, returning the new map.
///
/// Dropped entries are reported through `tracing`; use [`map::compose`] to
/// get them back as values.
pub fn compose_import_map(
    declaration: &ImportMap,
    base: &str,
    accumulated: &ImportMap,
) -> Result<ImportMap, OverrideConflict> {
    map::compose(declaration, base, accumulated).map(|composed| composed.map)
}

/// Resolve `specifier` as imported from `context_url`.
///
/// Relative and protocol-relative specifiers are first made absolute
/// against `context_url`; the result, or the bare specifier, is then looked
/// up in `map`.
pub fn resolve(map: &ImportMap, specifier: &str, context_url: &str) -> Resolution {
    let candidate = address::resolve_url(specifier, context_url);
    let candidate = candidate.as_deref().unwrap_or(specifier);
    map::resolve(map, candidate, context_url)
}

/// [`resolve`], collapsed to the resolved URL if there is one.
pub fn resolve_specifier(map: &ImportMap, specifier: &str, context_url: &str) -> Option<String> {
    resolve(map, specifier, context_url).into_option()
}
