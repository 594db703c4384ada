//! Record collection codec, written once and parameterized over [`Shape`].
//!
//! ```
//! use star_records::{decode, encode, Collection, Record, Shape};
//!
//! let stars = Collection::Bare(vec![
//!     Record::new("Sun", 0.000015813, ""),
//!     Record::new("Sirius", 8.6, "Canis Major"),
//! ]);
//! let text = encode(&stars, &Shape::Bare).unwrap();
//! assert_eq!(decode(&text, &Shape::Bare).unwrap(), stars);
//! ```

mod decoder;
mod encoder;
mod error;

use serde_json::Value;

use crate::collection::Collection;
use crate::shape::{Shape, ShapeError};

pub use error::{DecodeError, EncodeError};

/// Whitespace layout of encoded text. Decoding accepts either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Compact,
    /// Two-space indentation, one member per line.
    Pretty,
}

/// A codec bound to one shape and output layout.
#[derive(Debug, Clone)]
pub struct RecordCodec {
    shape: Shape,
    layout: Layout,
}

impl RecordCodec {
    pub fn new(shape: Shape) -> Result<Self, ShapeError> {
        shape.validate()?;
        Ok(Self {
            shape,
            layout: Layout::default(),
        })
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn encode(&self, collection: &Collection) -> Result<String, EncodeError> {
        encoder::encode(collection, &self.shape, self.layout)
    }

    pub fn encode_value(&self, collection: &Collection) -> Result<Value, EncodeError> {
        encoder::encode_value(collection, &self.shape)
    }

    pub fn decode(&self, text: &str) -> Result<Collection, DecodeError> {
        decoder::decode(text, &self.shape)
    }
}

/// Encode `collection` as compact JSON in the given shape.
pub fn encode(collection: &Collection, shape: &Shape) -> Result<String, EncodeError> {
    encoder::encode(collection, shape, Layout::Compact)
}

/// Encode `collection` as a [`serde_json::Value`], members in shape order.
pub fn encode_value(collection: &Collection, shape: &Shape) -> Result<Value, EncodeError> {
    encoder::encode_value(collection, shape)
}

/// Decode JSON text into a collection of the given shape.
pub fn decode(text: &str, shape: &Shape) -> Result<Collection, DecodeError> {
    decoder::decode(text, shape)
}
