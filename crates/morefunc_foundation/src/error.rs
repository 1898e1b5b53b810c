//! Error types for morefunc.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Kind;
use crate::value::Value;

/// The main error type for morefunc operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" {c}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records that this error happened below `key`.
    ///
    /// Called while unwinding a nested walk, so the outermost key is
    /// prepended last and ends up first in the path.
    #[must_use]
    pub fn within(mut self, key: &Value) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_outer_key(key.clone()));
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a missing structure entry error.
    #[must_use]
    pub fn missing_structure(key: Value) -> Self {
        Self::new(ErrorKind::MissingStructure { key })
    }

    /// Creates a missing encoded value error.
    #[must_use]
    pub fn missing_value(key: Value) -> Self {
        Self::new(ErrorKind::MissingValue { key })
    }

    /// Creates a malformed pair error.
    #[must_use]
    pub fn malformed_pair(element: Value) -> Self {
        Self::new(ErrorKind::MalformedPair(element))
    }

    /// Creates an unknown role error.
    #[must_use]
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRole(role.into()))
    }

    /// Creates a limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: Limit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had a different kind than the operation required.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: Kind,
        /// The kind actually encountered.
        actual: Kind,
    },

    /// An encoded key has no entry in the structure descriptor.
    #[error("no structure recorded for key {key}")]
    MissingStructure {
        /// The key that could not be looked up.
        key: Value,
    },

    /// A structure entry has no encoded counterpart.
    #[error("no encoded value for key {key}")]
    MissingValue {
        /// The key described by the structure but absent from the encoding.
        key: Value,
    },

    /// An element of an encoded set is not a `(key, value)` pair.
    #[error("malformed encoded pair: {0}")]
    MalformedPair(Value),

    /// A role label names neither side of a relation.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A configured limit was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(Limit),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Configurable limits that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    /// Maximum mapping nesting depth exceeded.
    MaxDepth {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepth { limit } => write!(f, "max nesting depth ({limit}) exceeded"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Keys leading from the outermost mapping to the failure.
    pub path: Vec<Value>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key below the current path.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<Value>) -> Self {
        self.path.push(key.into());
        self
    }

    /// Prepends a key above the current path.
    #[must_use]
    pub fn with_outer_key(mut self, key: Value) -> Self {
        self.path.insert(0, key);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return Ok(());
        }
        write!(f, "at ")?;
        for (i, key) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
