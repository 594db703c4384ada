//! Star record type.
//!
//! A record is a flat JSON object with exactly three members:
//!
//! ```json
//! { "name": "Sirius", "distance": 8.6, "constellation": "Canis Major" }
//! ```

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    /// Distance from Earth in light-years.
    pub distance: f64,
    pub constellation: String,
}

impl Record {
    pub fn new(name: impl Into<String>, distance: f64, constellation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance,
            constellation: constellation.into(),
        }
    }

    /// Whether `distance` is finite and non-negative.
    pub fn has_valid_distance(&self) -> bool {
        is_valid_distance(self.distance)
    }
}

pub(crate) fn is_valid_distance(distance: f64) -> bool {
    distance.is_finite() && distance >= 0.0
}

// ── Decode ──────────────────────────────────────────────────────────────────

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record object with name, distance and constellation")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut name: Option<String> = None;
        let mut distance: Option<f64> = None;
        let mut constellation: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(de::Error::duplicate_field("name"));
                    }
                    name = Some(map.next_value()?);
                }
                "distance" => {
                    if distance.is_some() {
                        return Err(de::Error::duplicate_field("distance"));
                    }
                    let value: f64 = map.next_value()?;
                    if !is_valid_distance(value) {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Float(value),
                            &"a finite, non-negative distance",
                        ));
                    }
                    distance = Some(value);
                }
                "constellation" => {
                    if constellation.is_some() {
                        return Err(de::Error::duplicate_field("constellation"));
                    }
                    constellation = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let name = name.ok_or_else(|| <M::Error as de::Error>::missing_field("name"))?;
        let distance =
            distance.ok_or_else(|| <M::Error as de::Error>::missing_field("distance"))?;
        let constellation = constellation
            .ok_or_else(|| <M::Error as de::Error>::missing_field("constellation"))?;
        Ok(Record {
            name,
            distance,
            constellation,
        })
    }
}
