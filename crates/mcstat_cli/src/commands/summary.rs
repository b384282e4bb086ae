//! Summary command implementation
//!
//! Reads a sample file and prints its descriptive statistics.

use std::path::Path;

use mcstat_core::io::read_floats;
use tracing::info;

use crate::{CliError, Result};

/// Descriptive statistics of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (N − 1 denominator), zero for one value
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl SampleSummary {
    /// Summarise `values`, or `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if count > 1 {
            let ss: f64 = values.iter().map(|x| (x - mean) * (x - mean)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}

/// Run the summary command
pub fn run(file: &Path) -> Result<()> {
    info!("Summarising {}", file.display());

    let values = read_floats(file)?;
    let summary = SampleSummary::from_values(&values).ok_or_else(|| {
        CliError::invalid_argument(format!("{} contains no values", file.display()))
    })?;

    println!("count: {}", summary.count);
    println!("mean:  {}", summary.mean);
    println!("std:   {}", summary.std_dev);
    println!("min:   {}", summary.min);
    println!("max:   {}", summary.max);
    Ok(())
}
