use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use star_records::{Layout, ShapeKind};

#[derive(Parser, Debug)]
#[command(name = "star-records")]
#[command(version)]
#[command(about = "Encode and decode star catalog records as JSON", long_about = None)]
pub(crate) struct CliArgs {
    #[command(subcommand)]
    pub(crate) command: CliCommands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CliCommands {
    /// Writes the built-in brightest-stars catalog as JSON
    Catalog {
        /// How the records are wrapped
        #[arg(short, long, value_enum, default_value_t = ShapeArg::Bare)]
        shape: ShapeArg,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Decodes a JSON collection and writes it back in canonical form.
    /// Reads from stdin when no file is given
    Normalize {
        /// How the records are wrapped
        #[arg(short, long, value_enum)]
        shape: ShapeArg,

        /// Slot names for the keyed shape, in output order. Defaults to the
        /// catalog's keys
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Member holding the records for the wrapped shape. Defaults to
        /// `stars`
        #[arg(short, long)]
        field: Option<String>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Input file
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ShapeArg {
    Keyed,
    Bare,
    Wrapped,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Keyed => ShapeKind::Keyed,
            ShapeArg::Bare => ShapeKind::Bare,
            ShapeArg::Wrapped => ShapeKind::Wrapped,
        }
    }
}

pub(crate) fn layout(pretty: bool) -> Layout {
    if pretty {
        Layout::Pretty
    } else {
        Layout::Compact
    }
}

pub(crate) fn parse_args() -> CliArgs {
    CliArgs::parse()
}
