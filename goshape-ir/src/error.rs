use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for goshape-ir operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor document")]
    #[diagnostic(code(goshape::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(goshape::validation_error), help("offending descriptor: {path}"))]
    Validation {
        message: String,
        /// Path through the forest, e.g. `roots[0].children[2]`.
        path: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error, deriving the source
    /// span from the error's line/column position.
    pub fn parse(src: impl Into<String>, filename: impl Into<String>, source: serde_json::Error) -> Box<Error> {
        let src = src.into();
        let filename: String = filename.into();
        let span = span_at(&src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src),
            span,
            source,
        })
    }

    /// Create a validation error for the descriptor at the given path.
    pub fn validation(message: impl Into<String>, path: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            message: message.into(),
            path: path.into(),
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte span into `src`.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split('\n').enumerate() {
        if i + 1 == line {
            offset += column.saturating_sub(1).min(text.len());
            return Some(SourceSpan::from(offset..offset));
        }
        offset += text.len() + 1;
    }
    None
}
