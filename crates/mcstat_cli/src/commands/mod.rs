//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod generate;
pub mod integrate;
pub mod summary;

use std::fmt::Display;
use std::io::{BufWriter, Write};
use std::path::Path;

use mcstat_core::io::write_sample;
use tracing::info;

use crate::Result;

/// Write `values` one per line to `output`, or to stdout when absent.
pub(crate) fn emit<T: Display>(values: &[T], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_sample(path, values)?;
            info!("Wrote {} values to {}", values.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for value in values {
                writeln!(out, "{}", value)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
