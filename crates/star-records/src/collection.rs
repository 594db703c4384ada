//! In-memory record collections.

use indexmap::IndexMap;

use crate::record::Record;
use crate::shape::ShapeKind;

/// A collection of records in one of the three shapes.
///
/// Keyed slots compare as a map; sequence variants compare element-wise in
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Keyed(IndexMap<String, Record>),
    Bare(Vec<Record>),
    Wrapped(Vec<Record>),
}

impl Collection {
    /// Build a keyed collection, keeping the iteration order of `slots`.
    pub fn keyed<I, K>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, Record)>,
        K: Into<String>,
    {
        Collection::Keyed(slots.into_iter().map(|(k, r)| (k.into(), r)).collect())
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Collection::Keyed(_) => ShapeKind::Keyed,
            Collection::Bare(_) => ShapeKind::Bare,
            Collection::Wrapped(_) => ShapeKind::Wrapped,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Keyed(slots) => slots.len(),
            Collection::Bare(records) | Collection::Wrapped(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records in slot order (keyed) or sequence order.
    pub fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        match self {
            Collection::Keyed(slots) => Box::new(slots.values()),
            Collection::Bare(records) | Collection::Wrapped(records) => Box::new(records.iter()),
        }
    }

    /// Record stored under `key`; always `None` for sequence shapes.
    pub fn get(&self, key: &str) -> Option<&Record> {
        match self {
            Collection::Keyed(slots) => slots.get(key),
            _ => None,
        }
    }
}
