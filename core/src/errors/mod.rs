mod declaration_error;
mod override_conflict;

pub use declaration_error::DeclarationError;
pub use override_conflict::OverrideConflict;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for loading and composing import maps.
#[derive(Debug, Error, Diagnostic)]
pub enum ImportMapError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Conflict(#[from] OverrideConflict),
}
