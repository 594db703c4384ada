//! Shape-driven JSON decoder.
//!
//! Decoding runs a [`DeserializeSeed`] chosen by the shape directly over the
//! input, so duplicate members are seen before any map collapses them.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use tracing::{debug, trace};

use super::error::DecodeError;
use crate::collection::Collection;
use crate::record::Record;
use crate::shape::{KeyedSchema, Shape};

pub(crate) fn decode(text: &str, shape: &Shape) -> Result<Collection, DecodeError> {
    shape.validate()?;
    trace!(shape = %shape.kind(), bytes = text.len(), "decoding collection");

    let mut deserializer = serde_json::Deserializer::from_str(text);
    let result = CollectionSeed { shape }
        .deserialize(&mut deserializer)
        .and_then(|collection| deserializer.end().map(|()| collection));

    match result {
        Ok(collection) => {
            debug!(shape = %shape.kind(), records = collection.len(), "decoded collection");
            Ok(collection)
        }
        Err(err) => {
            debug!(shape = %shape.kind(), error = %err, "decode failed");
            Err(DecodeError::from_json(shape.kind(), err))
        }
    }
}

struct CollectionSeed<'a> {
    shape: &'a Shape,
}

impl<'de> DeserializeSeed<'de> for CollectionSeed<'_> {
    type Value = Collection;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.shape {
            Shape::Keyed(schema) => deserializer
                .deserialize_map(SlotsVisitor { schema })
                .map(Collection::Keyed),
            Shape::Bare => Vec::<Record>::deserialize(deserializer).map(Collection::Bare),
            Shape::Wrapped { field } => deserializer
                .deserialize_map(WrapperVisitor { field })
                .map(Collection::Wrapped),
        }
    }
}

// ── Keyed ───────────────────────────────────────────────────────────────────

struct SlotsVisitor<'a> {
    schema: &'a KeyedSchema,
}

impl<'de> Visitor<'de> for SlotsVisitor<'_> {
    type Value = IndexMap<String, Record>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an object with the slots {}",
            self.schema.keys().join(", ")
        )
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut slots: Vec<Option<Record>> = vec![None; self.schema.len()];

        while let Some(key) = map.next_key::<String>()? {
            let Some(index) = self.schema.position(&key) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if slots[index].is_some() {
                return Err(de::Error::custom(format_args!("duplicate slot `{key}`")));
            }
            slots[index] = Some(map.next_value()?);
        }

        let mut records = IndexMap::with_capacity(slots.len());
        for (key, slot) in self.schema.keys().iter().zip(slots) {
            let record = slot.ok_or_else(|| {
                <M::Error as de::Error>::custom(format_args!("missing slot `{key}`"))
            })?;
            records.insert(key.clone(), record);
        }
        Ok(records)
    }
}

// ── Wrapped ─────────────────────────────────────────────────────────────────

struct WrapperVisitor<'a> {
    field: &'a str,
}

impl<'de> Visitor<'de> for WrapperVisitor<'_> {
    type Value = Vec<Record>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an object with a `{}` array of records", self.field)
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut records: Option<Vec<Record>> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key != self.field {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            if records.is_some() {
                return Err(de::Error::custom(format_args!("duplicate field `{key}`")));
            }
            records = Some(map.next_value()?);
        }

        records.ok_or_else(|| de::Error::custom(format_args!("missing field `{}`", self.field)))
    }
}
