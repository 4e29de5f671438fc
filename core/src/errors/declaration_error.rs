use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics::source_map::{SourceMap, SourcePos};

/// An import map declaration that is not valid JSON of the expected shape.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid import map: {message}")]
#[diagnostic(
    code(importmap::declaration),
    help("an import map is a JSON object with optional \"imports\" and \"scopes\" members")
)]
pub struct DeclarationError {
    pub message: String,

    #[source_code]
    pub source_code: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl DeclarationError {
    pub fn new(message: impl Into<String>, source: &str, offset: usize) -> Self {
        Self {
            message: message.into(),
            source_code: source.to_string(),
            span: (offset.min(source.len()), 0).into(),
        }
    }

    pub fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let offset = SourceMap::from_source(source).pos_to_byte(SourcePos {
            line: err.line(),
            col: err.column(),
        });
        Self::new(err.to_string(), source, offset)
    }
}
