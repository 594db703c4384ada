//! Built-in catalog of the brightest stars as seen from Earth.

use crate::collection::Collection;
use crate::record::Record;
use crate::shape::{KeyedSchema, Shape, ShapeKind};

/// Slot names of the keyed catalog, in declaration order.
pub const STAR_KEYS: [&str; 6] = [
    "sun",
    "sirius",
    "canopus",
    "rigil_kentaurus",
    "toliman",
    "arcturus",
];

/// The catalog records, in the same order as [`STAR_KEYS`].
pub fn brightest_stars() -> Vec<Record> {
    vec![
        Record::new("Sun", 0.000015813, ""),
        Record::new("Sirius", 8.6, "Canis Major"),
        Record::new("Canopus", 310.0, "Carina"),
        Record::new("RigilKentaurus", 4.4, "Centaurus"),
        Record::new("Toliman", 4.4, "Centaurus"),
        Record::new("Arcturus", 37.0, "Boötes"),
    ]
}

/// Shape descriptor for the catalog: [`STAR_KEYS`] when keyed, the `"stars"`
/// member when wrapped.
pub fn shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Keyed => Shape::Keyed(KeyedSchema::from_static(&STAR_KEYS)),
        ShapeKind::Bare => Shape::Bare,
        ShapeKind::Wrapped => Shape::wrapped_default(),
    }
}

pub fn collection(kind: ShapeKind) -> Collection {
    match kind {
        ShapeKind::Keyed => Collection::keyed(STAR_KEYS.into_iter().zip(brightest_stars())),
        ShapeKind::Bare => Collection::Bare(brightest_stars()),
        ShapeKind::Wrapped => Collection::Wrapped(brightest_stars()),
    }
}
