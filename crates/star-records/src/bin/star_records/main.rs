use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;

use star_records::{catalog, Layout, RecordCodec, Shape, ShapeError, ShapeKind};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::args::{layout, parse_args, CliCommands};

mod args;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match parse_args().command {
        CliCommands::Catalog { shape, pretty } => exec_catalog(shape.into(), layout(pretty))?,
        CliCommands::Normalize {
            shape,
            keys,
            field,
            pretty,
            file,
        } => {
            let shape = build_shape(shape.into(), keys, field)?;
            exec_normalize(shape, layout(pretty), file)?
        }
    }

    Ok(())
}

fn exec_catalog(kind: ShapeKind, layout: Layout) -> Result<(), Box<dyn Error>> {
    let codec = RecordCodec::new(catalog::shape(kind))?.with_layout(layout);
    println!("{}", codec.encode(&catalog::collection(kind))?);
    Ok(())
}

fn exec_normalize(
    shape: Shape,
    layout: Layout,
    file: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let codec = RecordCodec::new(shape)?.with_layout(layout);
    let input = match file {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let collection = codec.decode(&input)?;
    println!("{}", codec.encode(&collection)?);
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
enum ShapeArgsError {
    #[error("--keys only applies to the keyed shape, not {0}")]
    KeysWithoutKeyed(ShapeKind),
    #[error("--field only applies to the wrapped shape, not {0}")]
    FieldWithoutWrapped(ShapeKind),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

fn build_shape(
    kind: ShapeKind,
    keys: Option<Vec<String>>,
    field: Option<String>,
) -> Result<Shape, ShapeArgsError> {
    if keys.is_some() && kind != ShapeKind::Keyed {
        return Err(ShapeArgsError::KeysWithoutKeyed(kind));
    }
    if field.is_some() && kind != ShapeKind::Wrapped {
        return Err(ShapeArgsError::FieldWithoutWrapped(kind));
    }

    let shape = match kind {
        ShapeKind::Keyed => match keys {
            Some(keys) => Shape::keyed(keys)?,
            None => catalog::shape(ShapeKind::Keyed),
        },
        ShapeKind::Bare => Shape::Bare,
        ShapeKind::Wrapped => match field {
            Some(field) => Shape::wrapped(field)?,
            None => Shape::wrapped_default(),
        },
    };
    Ok(shape)
}
