use serde::{Deserialize, Serialize};

use crate::form::path::FieldPath;

/// Classifies a single validation failure. Every kind is a local,
/// recoverable, user-facing condition; none aborts the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Value empty after trimming.
    Required,
    /// Shorter than the configured minimum.
    TooShort { min: usize },
    /// Longer than the configured maximum.
    TooLong { max: usize },
    /// Value does not match the configured pattern or accepted set.
    InvalidFormat,
    /// Numeric value outside the configured bounds.
    OutOfRange { min: i32, max: i32 },
    /// Every flag in a checklist group is false.
    GroupEmpty,
    /// Required upload absent.
    Missing,
    /// Upload exceeds the byte ceiling.
    TooLarge { max_bytes: u64 },
    /// Fixed-length sequence has the wrong number of entries.
    WrongLength { expected: usize },
}

/// A single failed constraint, addressed by field path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: FieldPath,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<FieldPath>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Ordered collection of validation failures. Enumeration order follows
/// schema declaration order so rejections render reproducibly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorReport {
    errors: Vec<ValidationError>,
}

impl ErrorReport {
    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.iter().any(|error| error.path.as_str() == path)
    }

    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.path.as_str() == path)
            .map(|error| error.message.as_str())
    }

    pub fn kind_for(&self, path: &str) -> Option<&ErrorKind> {
        self.errors
            .iter()
            .find(|error| error.path.as_str() == path)
            .map(|error| &error.kind)
    }

    /// Field paths in declaration order.
    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.path.as_str()).collect()
    }

    /// Drop the entry for an exact path, if present. Used by the
    /// controller's clear-on-touch behavior.
    pub(crate) fn clear(&mut self, path: &str) -> bool {
        let before = self.errors.len();
        self.errors.retain(|error| error.path.as_str() != path);
        self.errors.len() != before
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
