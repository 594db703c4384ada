//! Shape-driven JSON encoder.

use serde::ser::{self, SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::EncodeError;
use super::Layout;
use crate::collection::Collection;
use crate::shape::Shape;

/// Encode `collection` as JSON text laid out per `layout`.
pub(crate) fn encode(
    collection: &Collection,
    shape: &Shape,
    layout: Layout,
) -> Result<String, EncodeError> {
    check(collection, shape)?;
    let shaped = Shaped { collection, shape };
    let text = match layout {
        Layout::Compact => serde_json::to_string(&shaped)?,
        Layout::Pretty => serde_json::to_string_pretty(&shaped)?,
    };
    debug!(
        shape = %shape.kind(),
        records = collection.len(),
        bytes = text.len(),
        "encoded collection"
    );
    Ok(text)
}

pub(crate) fn encode_value(collection: &Collection, shape: &Shape) -> Result<Value, EncodeError> {
    check(collection, shape)?;
    Ok(serde_json::to_value(Shaped { collection, shape })?)
}

/// Reject anything that would not survive a round trip.
fn check(collection: &Collection, shape: &Shape) -> Result<(), EncodeError> {
    shape.validate()?;
    if collection.kind() != shape.kind() {
        return Err(EncodeError::ShapeMismatch {
            collection: collection.kind(),
            shape: shape.kind(),
        });
    }
    if let (Shape::Keyed(schema), Collection::Keyed(slots)) = (shape, collection) {
        if let Some(key) = schema.keys().iter().find(|k| !slots.contains_key(k.as_str())) {
            return Err(EncodeError::MissingSlot(key.clone()));
        }
        if let Some(key) = slots.keys().find(|k| !schema.contains(k)) {
            return Err(EncodeError::UnexpectedSlot(key.clone()));
        }
    }
    match collection.records().find(|r| !r.has_valid_distance()) {
        Some(record) => Err(EncodeError::InvalidDistance {
            name: record.name.clone(),
            distance: record.distance,
        }),
        None => Ok(()),
    }
}

/// A collection paired with the shape it is written in.
struct Shaped<'a> {
    collection: &'a Collection,
    shape: &'a Shape,
}

impl Serialize for Shaped<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match (self.shape, self.collection) {
            (Shape::Keyed(schema), Collection::Keyed(slots)) => {
                let mut map = serializer.serialize_map(Some(schema.len()))?;
                for key in schema.keys() {
                    let record = slots.get(key).ok_or_else(|| {
                        <S::Error as ser::Error>::custom(format_args!("missing slot `{key}`"))
                    })?;
                    map.serialize_entry(key, record)?;
                }
                map.end()
            }
            (Shape::Bare, Collection::Bare(records)) => records.serialize(serializer),
            (Shape::Wrapped { field }, Collection::Wrapped(records)) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, records)?;
                map.end()
            }
            (shape, collection) => Err(ser::Error::custom(format_args!(
                "cannot encode a {} collection with a {} shape",
                collection.kind(),
                shape.kind()
            ))),
        }
    }
}
