//! Shape descriptors.
//!
//! A [`Shape`] tells the codec how a collection of records is wrapped on the
//! wire:
//!
//! - keyed: `{ "<key>": <record>, ... }`, one member per schema key;
//! - bare: `[ <record>, ... ]`;
//! - wrapped: `{ "<field>": [ <record>, ... ] }`.

use std::fmt;

use thiserror::Error;

/// Member name used by [`Shape::wrapped_default`].
pub const DEFAULT_WRAPPED_FIELD: &str = "stars";

/// Field-less shape tag shared by [`Shape`] and
/// [`Collection`](crate::Collection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Keyed,
    Bare,
    Wrapped,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Keyed, ShapeKind::Bare, ShapeKind::Wrapped];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyed => "keyed",
            Self::Bare => "bare",
            Self::Wrapped => "wrapped",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("keyed schema declares no keys")]
    NoKeys,
    #[error("keyed schema declares an empty key")]
    EmptyKey,
    #[error("keyed schema declares `{0}` more than once")]
    DuplicateKey(String),
    #[error("wrapped shape has an empty field name")]
    EmptyField,
}

/// Ordered list of slot names for the keyed shape.
///
/// Keys are non-empty and unique; their order is the order members are
/// written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedSchema {
    keys: Vec<String>,
}

impl KeyedSchema {
    pub fn new<I, S>(keys: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        validate_keys(keys.iter().map(String::as_str))?;
        Ok(Self { keys })
    }

    /// Build a schema from keys known to be valid at compile time.
    pub(crate) fn from_static(keys: &[&str]) -> Self {
        debug_assert!(validate_keys(keys.iter().copied()).is_ok());
        Self {
            keys: keys.iter().map(|k| (*k).to_owned()).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Declaration index of `key`, if the schema has it.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }
}

fn validate_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<(), ShapeError> {
    let mut seen: Vec<&str> = Vec::new();
    for key in keys {
        if key.is_empty() {
            return Err(ShapeError::EmptyKey);
        }
        if seen.contains(&key) {
            return Err(ShapeError::DuplicateKey(key.to_owned()));
        }
        seen.push(key);
    }
    if seen.is_empty() {
        return Err(ShapeError::NoKeys);
    }
    Ok(())
}

/// Shape descriptor the codec is parameterized over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Keyed(KeyedSchema),
    Bare,
    Wrapped { field: String },
}

impl Shape {
    pub fn keyed<I, S>(keys: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeyedSchema::new(keys).map(Shape::Keyed)
    }

    pub fn bare() -> Self {
        Shape::Bare
    }

    pub fn wrapped(field: impl Into<String>) -> Result<Self, ShapeError> {
        let shape = Shape::Wrapped {
            field: field.into(),
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Wrapped shape using the `"stars"` member.
    pub fn wrapped_default() -> Self {
        Shape::Wrapped {
            field: DEFAULT_WRAPPED_FIELD.to_owned(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Keyed(_) => ShapeKind::Keyed,
            Shape::Bare => ShapeKind::Bare,
            Shape::Wrapped { .. } => ShapeKind::Wrapped,
        }
    }

    /// Check structural integrity.
    ///
    /// Keyed schemas are validated on construction; the wrapped field is
    /// public and checked here.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Keyed(schema) => validate_keys(schema.keys().iter().map(String::as_str)),
            Shape::Bare => Ok(()),
            Shape::Wrapped { field } if field.is_empty() => Err(ShapeError::EmptyField),
            Shape::Wrapped { .. } => Ok(()),
        }
    }
}
