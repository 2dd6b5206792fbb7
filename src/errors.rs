//! Error types with rich diagnostics using miette
//!
//! Attribute errors carry source spans so a bad attribute list points at the
//! offending token.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<attrs>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors in the shape configuration itself
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported arrow edge: {value}")]
    #[diagnostic(
        code(tipshape::config::invalid_edge),
        help("arrow edge must be 0 (top), 1 (left), 2 (bottom) or 3 (right)")
    )]
    InvalidEdgeConfiguration { value: i64 },
}

// ============================================================================
// Attribute Errors
// ============================================================================

/// Errors that occur while reading an attribute list
#[derive(Error, Diagnostic, Debug)]
pub enum AttrError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(tipshape::attrs::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown attribute: {name}")]
    #[diagnostic(code(tipshape::attrs::unknown_attribute))]
    UnknownAttribute {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a tooltip attribute")]
        span: SourceSpan,
        #[help]
        suggestion: Option<String>,
    },

    #[error("attribute set twice: {name}")]
    #[diagnostic(code(tipshape::attrs::duplicate_attribute))]
    DuplicateAttribute {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("first set here")]
        first: SourceSpan,
        #[label("set again here")]
        second: SourceSpan,
    },

    #[error("type mismatch for {name}: expected {expected}")]
    #[diagnostic(code(tipshape::attrs::type_mismatch))]
    TypeMismatch {
        name: String,
        expected: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("this value")]
        span: SourceSpan,
    },

    #[error("invalid color: {value}")]
    #[diagnostic(
        code(tipshape::attrs::invalid_color),
        help("use #RGB, #ARGB, #RRGGBB, #AARRGGBB or a color name")
    )]
    InvalidColor {
        value: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a color")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidEdge(#[from] EdgeAtSpan),
}

/// [`ConfigError::InvalidEdgeConfiguration`] located in the attribute source.
#[derive(Error, Diagnostic, Debug)]
#[error("{inner}")]
#[diagnostic(code(tipshape::attrs::invalid_edge))]
pub struct EdgeAtSpan {
    pub inner: ConfigError,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("unsupported edge")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl AttrError {
    /// The configuration error underneath, if this is one.
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            AttrError::InvalidEdge(e) => Some(&e.inner),
            _ => None,
        }
    }
}
