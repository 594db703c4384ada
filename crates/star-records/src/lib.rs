//! JSON codec for star catalog records.
//!
//! A collection of [`Record`]s travels as JSON in one of three shapes
//! (keyed slots, a bare array, or an array wrapped in a named member). The
//! codec is written once and driven by a [`Shape`] descriptor; every shape
//! round-trips exactly, including sub-light-year distances.

mod collection;
mod record;
mod shape;

pub mod catalog;
pub mod codec;

pub use codec::{decode, encode, encode_value, DecodeError, EncodeError, Layout, RecordCodec};
pub use collection::Collection;
pub use record::Record;
pub use shape::{KeyedSchema, Shape, ShapeError, ShapeKind, DEFAULT_WRAPPED_FIELD};
