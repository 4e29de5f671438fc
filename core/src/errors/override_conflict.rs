use miette::Diagnostic;
use thiserror::Error;

use crate::map::MappingTarget;

/// Two declarations assign different targets to the same resolved key.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("rejected map override \"{key}\" from {existing} to {attempted}{}", in_scope(.scope))]
#[diagnostic(
    code(importmap::override_conflict),
    help("a specifier can only be mapped once per import map or scope")
)]
pub struct OverrideConflict {
    pub key: String,
    /// Scope root of the conflicting bucket, `None` for top-level imports.
    pub scope: Option<String>,
    pub existing: MappingTarget,
    pub attempted: MappingTarget,
}

fn in_scope(scope: &Option<String>) -> String {
    scope
        .as_deref()
        .map(|root| format!(" in scope {root}"))
        .unwrap_or_default()
}
