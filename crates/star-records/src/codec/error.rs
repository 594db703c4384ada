//! Codec error types.

use serde_json::error::Category;
use thiserror::Error;

use crate::shape::{ShapeError, ShapeKind};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
    #[error("cannot encode a {collection} collection with a {shape} shape")]
    ShapeMismatch {
        collection: ShapeKind,
        shape: ShapeKind,
    },
    #[error("missing slot `{0}`")]
    MissingSlot(String),
    #[error("slot `{0}` is not declared by the schema")]
    UnexpectedSlot(String),
    #[error("record `{name}` has invalid distance {distance}")]
    InvalidDistance { name: String, distance: f64 },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
    /// Input is not well-formed JSON, including truncated input and
    /// trailing characters.
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// Well-formed JSON whose structure or values do not fit the shape.
    #[error("JSON does not match the {shape} shape: {source}")]
    Mismatch {
        shape: ShapeKind,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub(crate) fn from_json(shape: ShapeKind, err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::Mismatch { shape, source: err },
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax(err),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, DecodeError::Syntax(_))
    }

    fn json(&self) -> Option<&serde_json::Error> {
        match self {
            DecodeError::Shape(_) => None,
            DecodeError::Syntax(err) | DecodeError::Mismatch { source: err, .. } => Some(err),
        }
    }

    /// One-based line of the failure, when it came from the input text.
    pub fn line(&self) -> Option<usize> {
        self.json().map(serde_json::Error::line)
    }

    /// One-based column of the failure, when it came from the input text.
    pub fn column(&self) -> Option<usize> {
        self.json().map(serde_json::Error::column)
    }
}
