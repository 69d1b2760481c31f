//! Domain error kinds shared by service callers.
//!
//! # Responsibility
//! - Classify every failure below the API layer into a small set of kinds.
//! - Carry human-readable context without losing the original kind.
//!
//! # Invariants
//! - Adding context never changes `kind`.
//! - Only the API layer turns a kind into a transport status.

use crate::repo::article_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Abstract failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lookup miss.
    NotFound,
    /// Duplicate identifier on create.
    AlreadyExists,
    /// Malformed request shape or value.
    InvalidArgument,
    /// I/O or unexpected failure.
    Unknown,
}

impl ErrorKind {
    /// Stable snake_case label used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::InvalidArgument => "invalid_argument",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Kind-tagged domain error with a context chain.
///
/// `Display` renders the full context chain, e.g.
/// `get article `7`: no article found with id: 7`.
#[derive(Debug)]
pub struct ArticleError {
    kind: ErrorKind,
    message: String,
    source: Option<BoxedSource>,
}

impl ArticleError {
    /// Creates an error without an underlying cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Prepends context, keeping kind and original cause.
    pub fn with_context(self, context: impl Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{context}: {}", self.message),
            source: self.source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Full message including context chain.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ArticleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ArticleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn Error + 'static))
    }
}

impl From<RepoError> for ArticleError {
    fn from(value: RepoError) -> Self {
        let kind = value.kind();
        Self {
            kind,
            message: value.to_string(),
            source: Some(Box::new(value)),
        }
    }
}
