use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::span;

/// Result type for astgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Structural errors raised while building a [`Schema`](crate::Schema) from a
/// document value.
///
/// These carry no source text; [`SourceContext::schema_error`] attaches it
/// when the document came from a file or string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SchemaError {
    #[error("missing required key '{key}'")]
    #[diagnostic(
        code(astgen::missing_key),
        help("every schema needs 'sys_includes', 'project_includes', 'namespace', 'ast' and 'printer'")
    )]
    MissingKey { key: String },

    #[error("invalid definition of '{path}': expected {expected}, found {found}")]
    #[diagnostic(code(astgen::invalid_shape))]
    InvalidShape {
        /// Dotted path of the offending entry (e.g. `Expr.Binary.op`)
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemaError {
    pub(crate) fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub(crate) fn invalid_shape(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidShape {
            path: path.into(),
            expected,
            found,
        }
    }

    /// The last path segment or key the error refers to.
    pub fn name(&self) -> &str {
        let full = match self {
            Self::MissingKey { key } => key,
            Self::InvalidShape { path, .. } => path,
        };
        full.rsplit('.').next().unwrap_or(full)
    }
}

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a JSON syntax error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span::offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a TOML syntax error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Attach this source to a structural schema error.
    pub fn schema_error(&self, error: SchemaError) -> Box<Error> {
        match error {
            SchemaError::MissingKey { key } => Box::new(Error::MissingKey {
                src: self.named_source(),
                key,
            }),
            SchemaError::InvalidShape {
                path,
                expected,
                found,
            } => {
                let name = path.rsplit('.').next().unwrap_or(&path);
                let span = span::find_key_span(&self.src, name);
                Box::new(Error::InvalidShape {
                    src: self.named_source(),
                    span,
                    path,
                    expected,
                    found,
                })
            }
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(astgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON schema")]
    #[diagnostic(code(astgen::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML schema")]
    #[diagnostic(code(astgen::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required key '{key}'")]
    #[diagnostic(
        code(astgen::missing_key),
        help("add '{key}' to the schema; all printer sections must be present, even if empty")
    )]
    MissingKey {
        #[source_code]
        src: NamedSource<String>,
        key: String,
    },

    #[error("invalid definition of '{path}'")]
    #[diagnostic(
        code(astgen::invalid_shape),
        help(
            "a node entry must be a mapping (nested struct), a list of strings (enum) or a string (field type)"
        )
    )]
    InvalidShape {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}, found {found}")]
        span: Option<SourceSpan>,
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// The structural schema error this diagnostic wraps, if any.
    pub fn schema_error(&self) -> Option<SchemaError> {
        match self {
            Self::MissingKey { key, .. } => Some(SchemaError::MissingKey { key: key.clone() }),
            Self::InvalidShape {
                path,
                expected,
                found,
                ..
            } => Some(SchemaError::InvalidShape {
                path: path.clone(),
                expected: *expected,
                found: *found,
            }),
            Self::Io { .. } | Self::Json { .. } | Self::Toml { .. } => None,
        }
    }
}
