use miette::Diagnostic;
use thiserror::Error;

/// A mapping whose target could not be resolved. The entry is dropped and
/// composition continues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("mapping \"{key}\" -> \"{target}\" does not resolve")]
#[diagnostic(
    code(importmap::unresolvable_target),
    severity(Warning),
    help("map the target in an earlier import map, or use a relative or absolute URL")
)]
pub struct UnresolvableTarget {
    pub key: String,
    pub target: String,
    pub scope: Option<String>,
}
